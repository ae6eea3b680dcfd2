use crate::infra::read_submission;
use aps_positioning::config::AppConfig;
use aps_positioning::error::AppError;
use aps_positioning::results::{
    AdminSummary, AssessmentOutcome, AssessmentService, CsvResultStore, ResultRow, SummaryFilter,
};
use aps_positioning::scoring::{Domain, ScoringEngine};
use aps_positioning::survey::FormProgress;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Questionnaire answers as JSON (same shape as the API body)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Write the single-row result CSV to this path
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
    /// Append the result row to the configured results file
    #[arg(long)]
    pub(crate) persist: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SummaryArgs {
    /// Keep only rows from this department, e.g. "59 - Nord"
    #[arg(long)]
    pub(crate) departement: Option<String>,
    /// Keep only rows of this establishment type, e.g. "ESAT"
    #[arg(long = "type")]
    pub(crate) kind: Option<String>,
    /// Keep only rows of this age range, e.g. "Adultes"
    #[arg(long)]
    pub(crate) tranche_age: Option<String>,
    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl SummaryArgs {
    pub(crate) fn filter(&self) -> SummaryFilter {
        SummaryFilter {
            departement: self.departement.clone(),
            kind: self.kind.clone(),
            tranche_age: self.tranche_age.clone(),
        }
    }
}

fn stored_results_service() -> Result<AssessmentService<CsvResultStore>, AppError> {
    let config = AppConfig::load()?;
    let store = Arc::new(CsvResultStore::new(config.results.path));
    Ok(AssessmentService::new(ScoringEngine::default(), store))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        export,
        persist,
        json,
    } = args;

    let submission = read_submission(&answers)?;
    let progress = submission.completion();
    let service = stored_results_service()?;

    let outcome = service.assess(submission)?;
    if persist {
        service.record(&outcome)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render_assessment(&outcome, progress, service.engine());
    }

    if let Some(path) = export {
        let export = AssessmentService::<CsvResultStore>::export_outcome(&outcome)?;
        std::fs::write(&path, export.content)?;
        if !json {
            println!("\nRésultats exportés dans {}", path.display());
        }
    }

    if persist && !json {
        println!(
            "Résultat enregistré dans {}",
            service.store().path().display()
        );
    }

    Ok(())
}

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), AppError> {
    let service = stored_results_service()?;
    let summary = service.summary(args.filter())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_summary(&summary);
    }
    Ok(())
}

pub(crate) fn render_assessment(
    outcome: &AssessmentOutcome,
    progress: FormProgress,
    engine: &ScoringEngine,
) {
    let report = &outcome.report;
    let row = &outcome.row;
    let tiers = engine.config().tiers();

    println!("Auto-positionnement APS: {}", row.establishment);
    println!("{} | {} | {}", row.department, row.kind, row.age_range);
    println!(
        "Questionnaire complété: {}/{} ({}%)",
        progress.done, progress.total, progress.percent
    );

    println!("\nIndicateurs par domaine");
    for view in &report.domains {
        println!(
            "- {} {}: {:.1}/100 (poids {}) {}",
            view.tier.marker(),
            view.label,
            view.score,
            view.weight,
            view.tier_label
        );
    }

    println!(
        "\nIndicateur global: {:.1}/100 ({} {})",
        report.global_score.value(),
        report.global_tier.marker(),
        report.global_tier.label()
    );
    println!(
        "Domaines ≥ {}: {} | Domaines < {}: {}",
        tiers.high(),
        report.domains_on_target,
        tiers.mid(),
        report.domains_to_strengthen
    );

    println!("\nRecommandations");
    for recommendation in &report.recommendations {
        println!("- {}", recommendation.render());
    }
}

fn summary_line(row: &ResultRow) -> String {
    format!(
        "{} | {} | {} | {} | {} | {:.1}/100",
        row.recorded_at,
        row.establishment,
        row.department,
        row.kind,
        row.age_range,
        row.global_indicator
    )
}

pub(crate) fn render_summary(summary: &AdminSummary) {
    println!("Admin: résultats globaux");

    if summary.total_rows == 0 {
        println!("Aucune donnée enregistrée pour le moment.");
        return;
    }

    println!(
        "Filtres disponibles: départements [{}], types [{}], tranches d'âge [{}]",
        summary.options.departements.join(", "),
        summary.options.types.join(", "),
        summary.options.tranches_age.join(", ")
    );
    println!(
        "Établissements (filtre): {}/{}",
        summary.matching_rows, summary.total_rows
    );

    let (Some(means), Some(global)) = (summary.domain_means, summary.global_mean) else {
        println!("Aucune ligne avec ces filtres.");
        return;
    };

    println!("\nRéponses retenues");
    for line in summary.rows.iter().map(summary_line) {
        println!("- {line}");
    }

    println!("\nMoyenne des indicateurs");
    for domain in Domain::ordered() {
        println!("- {}: {:.1}/100", domain.label(), means.get(domain));
    }
    println!("\nIndicateur global moyen: {global:.1}/100");
    println!(
        "Dernière mise à jour: {}",
        Local::now().format("%d/%m/%Y %H:%M")
    );
}

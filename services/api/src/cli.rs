use crate::report::{run_score, run_summary, ScoreArgs, SummaryArgs};
use crate::server;
use aps_positioning::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "APS self-positioning",
    about = "Score APS self-positioning questionnaires and serve the results API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a questionnaire answers file and print the report
    Score(ScoreArgs),
    /// Print the admin summary over stored results
    Summary(SummaryArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Keep results in memory instead of the CSV results file
    #[arg(long)]
    pub(crate) ephemeral: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Summary(args) => run_summary(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["aps-positioning-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_accepts_export_and_persist() {
        let cli = Cli::try_parse_from([
            "aps-positioning-api",
            "score",
            "--answers",
            "reponses.json",
            "--export",
            "resultats.csv",
            "--persist",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.answers.to_str(), Some("reponses.json"));
                assert!(args.persist);
                assert!(args.export.is_some());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn summary_filters_use_form_names() {
        let cli = Cli::try_parse_from([
            "aps-positioning-api",
            "summary",
            "--departement",
            "59 - Nord",
            "--type",
            "ESAT",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Summary(args)) => {
                let filter = args.filter();
                assert_eq!(filter.departement.as_deref(), Some("59 - Nord"));
                assert_eq!(filter.kind.as_deref(), Some("ESAT"));
                assert!(filter.tranche_age.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

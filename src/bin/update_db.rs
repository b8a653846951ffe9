//! Reshapes a legacy `oldDB.json` port dump into the `db.json` store layout.

use std::path::PathBuf;

use clap::Parser;
use port_admin::modules::migration::migrate_file;

/// Reshape a keyed port dump into the json-server collection layout
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Legacy document keyed by record id
    #[arg(default_value = "oldDB.json")]
    source: PathBuf,

    /// File to write the `{ "ports": [...] }` document to
    #[arg(default_value = "db.json")]
    target: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    match migrate_file(&args.source, &args.target) {
        Ok(count) => {
            tracing::info!(
                "{} has been updated successfully ({} records)",
                args.target.display(),
                count
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Migration from {} failed: {}", args.source.display(), e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_default_paths() {
        let args = Args::try_parse_from(["update-db"]).unwrap();
        assert_eq!(args.source, PathBuf::from("oldDB.json"));
        assert_eq!(args.target, PathBuf::from("db.json"));
    }

    #[test]
    fn test_explicit_paths() {
        let args = Args::try_parse_from(["update-db", "legacy.json", "out.json"]).unwrap();
        assert_eq!(args.source, PathBuf::from("legacy.json"));
        assert_eq!(args.target, PathBuf::from("out.json"));
    }

    #[test]
    fn test_help_is_not_a_source_path() {
        let err = Args::try_parse_from(["update-db", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_extra_argument_is_rejected() {
        assert!(Args::try_parse_from(["update-db", "a.json", "b.json", "c.json"]).is_err());
    }
}

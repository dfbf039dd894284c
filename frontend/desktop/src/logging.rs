use serde::{Deserialize, Serialize};
use slog::Drain;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingKind {
    Term,
    Off,
}

pub fn init(kind: LoggingKind) -> slog::Logger {
    match kind {
        LoggingKind::Term => {
            let decorator = slog_term::TermDecorator::new().stdout().build();
            let drain = slog_term::CompactFormat::new(decorator)
                .use_custom_timestamp(|_: &mut dyn std::io::Write| Ok(()))
                .build()
                .fuse();
            slog::Logger::root(
                slog_async::Async::new(drain)
                    .overflow_strategy(slog_async::OverflowStrategy::Block)
                    .thread_name("async logger".to_string())
                    .build()
                    .fuse(),
                slog::o!(),
            )
        }

        LoggingKind::Off => slog::Logger::root(slog::Discard, slog::o!()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_kinds_are_kebab_case() {
        assert_eq!(serde_json::to_string(&LoggingKind::Term).unwrap(), "\"term\"");
        let kind: LoggingKind = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(kind, LoggingKind::Off);
        slog::info!(init(kind), "discarded");
    }
}

//! Trap for statements that are built but never compiled or executed.
//!
//! Forgetting the terminal call is a silent bug: the statement is simply
//! never run. Terminal-capable types therefore carry an [`ExecutionGuard`]
//! that reports loudly at scope exit if none of `to_operation_node`,
//! `compile` or `execute` was invoked. The same types deliberately implement
//! no `Future`/`IntoFuture` capability, and every builder is `#[must_use]`,
//! so both misuse shapes fail at the point of the mistake.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::error;

#[derive(Debug)]
pub(crate) struct ExecutionGuard {
    type_name: &'static str,
    armed: AtomicBool,
}

impl ExecutionGuard {
    pub(crate) fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            armed: AtomicBool::new(true),
        }
    }

    /// Marks the statement as handled. Called by every terminal method and
    /// by builder methods that hand the statement off to a successor.
    pub(crate) fn disarm(&self) {
        self.armed.store(false, Ordering::Relaxed);
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Relaxed)
    }
}

impl Clone for ExecutionGuard {
    fn clone(&self) -> Self {
        // Each clone is its own statement handle and must be invoked itself.
        Self {
            type_name: self.type_name,
            armed: AtomicBool::new(self.armed.load(Ordering::Relaxed)),
        }
    }
}

impl Drop for ExecutionGuard {
    fn drop(&mut self) {
        if *self.armed.get_mut() && !std::thread::panicking() {
            error!(
                "{} was dropped without `execute()`, `compile()` or `to_operation_node()` \
                 being called; the statement was never run",
                self.type_name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::alter_table::AlterTableNode;
    use crate::ast::common::TableNode;
    use crate::ast::drop_index::DropIndexNode;
    use crate::build::alter_table::AlterTableBuilder;
    use crate::build::drop_index::DropIndexBuilder;
    use crate::dialect::Postgres;
    use crate::executor::{DefaultQueryExecutor, NoopDriver, QueryExecutor, QueryId};
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::subscriber::with_default;
    use tracing::{Event, Metadata, Subscriber};

    /// Minimal subscriber collecting error-event messages.
    #[derive(Clone, Default)]
    struct Collector {
        messages: Arc<Mutex<Vec<String>>>,
    }

    struct MessageVisitor<'a>(&'a mut String);

    impl Visit for MessageVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                *self.0 = format!("{:?}", value);
            }
        }
    }

    impl Subscriber for Collector {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            *metadata.level() == Level::ERROR
        }

        fn new_span(&self, _span: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _span: &Id, _values: &Record<'_>) {}

        fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut message = String::new();
            event.record(&mut MessageVisitor(&mut message));
            self.messages.lock().unwrap().push(message);
        }

        fn enter(&self, _span: &Id) {}

        fn exit(&self, _span: &Id) {}
    }

    #[test]
    fn test_armed_guard_reports_on_drop() {
        let collector = Collector::default();
        let messages = collector.messages.clone();

        with_default(collector, || {
            let guard = ExecutionGuard::new("AlterTableExecutor");
            assert!(guard.is_armed());
            drop(guard);
        });

        let messages = messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("AlterTableExecutor"));
        assert!(messages[0].contains("never run"));
    }

    #[test]
    fn test_disarmed_guard_is_silent() {
        let collector = Collector::default();
        let messages = collector.messages.clone();

        with_default(collector, || {
            let guard = ExecutionGuard::new("DropIndexBuilder");
            guard.disarm();
            drop(guard);
        });

        assert!(messages.lock().unwrap().is_empty());
    }

    fn executor() -> Arc<dyn QueryExecutor> {
        Arc::new(DefaultQueryExecutor::new(
            Arc::new(Postgres),
            Arc::new(NoopDriver),
        ))
    }

    #[test]
    fn test_unexecuted_terminals_report_their_type() {
        let collector = Collector::default();
        let messages = collector.messages.clone();

        with_default(collector, || {
            let builder = AlterTableBuilder::new(
                QueryId::new(),
                AlterTableNode::create(TableNode::create("person")),
                executor(),
            );
            drop(builder.rename_to("people"));

            drop(DropIndexBuilder::new(
                QueryId::new(),
                DropIndexNode::create("idx_name"),
                executor(),
            ));
        });

        let messages = messages.lock().unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("AlterTableExecutor"));
        assert!(messages[1].contains("DropIndexBuilder"));
    }

    #[test]
    fn test_compiled_terminal_is_silent_on_drop() {
        let collector = Collector::default();
        let messages = collector.messages.clone();

        with_default(collector, || {
            let builder = AlterTableBuilder::new(
                QueryId::new(),
                AlterTableNode::create(TableNode::create("person")),
                executor(),
            );
            let terminal = builder.rename_to("people");
            terminal.compile().unwrap();
            drop(terminal);
        });

        assert!(messages.lock().unwrap().is_empty());
    }

    #[test]
    fn test_clone_carries_its_own_armed_state() {
        let guard = ExecutionGuard::new("AlterTableExecutor");
        let clone = guard.clone();
        guard.disarm();

        assert!(clone.is_armed());
        clone.disarm();
    }
}

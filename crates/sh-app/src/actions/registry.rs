use std::sync::Arc;
use tracing::debug;

use sh_core::action::{Action, ActionError};
use sh_core::data::DataPackage;

use crate::concurrency::try_filter_async;

/// Fixed set of actions ranked by ascending `order`.
///
/// Read-only after construction; safe to share between callers.
pub struct ActionRegistry {
    actions: Vec<Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new(mut actions: Vec<Arc<dyn Action>>) -> Self {
        actions.sort_by_key(|action| action.order());
        Self { actions }
    }

    pub fn actions(&self) -> &[Arc<dyn Action>] {
        &self.actions
    }

    pub fn find(&self, title: &str) -> Option<&Arc<dyn Action>> {
        self.actions.iter().find(|action| action.title() == title)
    }

    /// Actions able to handle `package`, in presentation order.
    ///
    /// Every applicability test runs concurrently; the first failing test
    /// fails the whole query.
    pub async fn applicable_actions(
        &self,
        package: &DataPackage,
    ) -> Result<Vec<Arc<dyn Action>>, ActionError> {
        let applicable =
            try_filter_async(&self.actions, |action| action.can_perform(package)).await?;

        debug!(
            registered = self.actions.len(),
            applicable = applicable.len(),
            "Evaluated action applicability"
        );
        Ok(applicable.into_iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sh_core::data::DataItem;
    use std::time::Duration;

    struct StubAction {
        title: &'static str,
        order: u8,
        applicable: bool,
        delay_ms: u64,
    }

    #[async_trait]
    impl Action for StubAction {
        fn title(&self) -> &str {
            self.title
        }

        fn order(&self) -> u8 {
            self.order
        }

        async fn can_perform(&self, _package: &DataPackage) -> Result<bool, ActionError> {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            Ok(self.applicable)
        }

        async fn perform(&self, _package: &DataPackage) -> Result<(), ActionError> {
            Ok(())
        }
    }

    struct FailingAction;

    #[async_trait]
    impl Action for FailingAction {
        fn title(&self) -> &str {
            "failing"
        }

        fn order(&self) -> u8 {
            1
        }

        async fn can_perform(&self, _package: &DataPackage) -> Result<bool, ActionError> {
            Err(ActionError::UnexpectedState("applicability check failed".into()))
        }

        async fn perform(&self, _package: &DataPackage) -> Result<(), ActionError> {
            Ok(())
        }
    }

    fn stub(title: &'static str, order: u8, applicable: bool, delay_ms: u64) -> Arc<dyn Action> {
        Arc::new(StubAction {
            title,
            order,
            applicable,
            delay_ms,
        })
    }

    fn titles(actions: &[Arc<dyn Action>]) -> Vec<&str> {
        actions.iter().map(|action| action.title()).collect()
    }

    #[test]
    fn actions_are_ranked_by_order() {
        let registry = ActionRegistry::new(vec![
            stub("zip", 75, true, 0),
            stub("paths", 50, true, 0),
            stub("upper", 10, true, 0),
        ]);

        assert_eq!(titles(registry.actions()), vec!["upper", "paths", "zip"]);
        assert_eq!(registry.find("paths").map(|a| a.order()), Some(50));
        assert!(registry.find("missing").is_none());
    }

    #[tokio::test]
    async fn applicable_actions_keep_order_regardless_of_completion() {
        let registry = ActionRegistry::new(vec![
            stub("a", 1, true, 30),
            stub("b", 2, false, 10),
            stub("c", 3, true, 0),
        ]);
        let package = DataPackage::new(vec![DataItem::text("x")]);

        let applicable = registry.applicable_actions(&package).await.unwrap();

        assert_eq!(titles(&applicable), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn failing_applicability_test_fails_query() {
        let actions: Vec<Arc<dyn Action>> = vec![stub("a", 0, true, 0), Arc::new(FailingAction)];
        let registry = ActionRegistry::new(actions);
        let package = DataPackage::new(vec![]);

        let result = registry.applicable_actions(&package).await;

        assert!(matches!(result, Err(ActionError::UnexpectedState(_))));
    }
}

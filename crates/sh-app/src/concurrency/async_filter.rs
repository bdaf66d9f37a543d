use futures::future::{join_all, try_join_all};
use std::future::Future;

/// Returns the items for which `predicate` resolved to `true`.
///
/// All predicates are polled concurrently, but the result always follows
/// the input order, never completion order.
pub async fn filter_async<'a, T, F, Fut>(items: &'a [T], predicate: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> Fut,
    Fut: Future<Output = bool>,
{
    let verdicts = join_all(items.iter().map(&predicate)).await;

    items
        .iter()
        .zip(verdicts)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}

/// Fallible variant of [`filter_async`]; the first predicate error aborts
/// the whole filter.
pub async fn try_filter_async<'a, T, E, F, Fut>(
    items: &'a [T],
    predicate: F,
) -> Result<Vec<&'a T>, E>
where
    F: Fn(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let verdicts = try_join_all(items.iter().map(&predicate)).await?;

    Ok(items
        .iter()
        .zip(verdicts)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    #[tokio::test]
    async fn output_follows_input_order_not_completion_order() {
        let items = ["a", "b", "c"];
        let completed = Mutex::new(Vec::new());

        let kept = filter_async(&items, |item| {
            let completed = &completed;
            async move {
                // "a" finishes last, "c" first
                let delay = match *item {
                    "a" => 30,
                    "b" => 20,
                    _ => 10,
                };
                tokio::time::sleep(Duration::from_millis(delay)).await;
                completed.lock().unwrap().push(*item);
                *item != "b"
            }
        })
        .await;

        assert_eq!(kept, vec![&"a", &"c"]);
        assert_eq!(*completed.lock().unwrap(), vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let items: [u8; 0] = [];
        let kept = filter_async(&items, |_| async { true }).await;
        assert!(kept.is_empty());
    }

    #[tokio::test]
    async fn try_filter_keeps_order() {
        let items = [1, 2, 3, 4];
        let kept: Result<Vec<&i32>, String> =
            try_filter_async(&items, |n| async move { Ok(n % 2 == 0) }).await;
        assert_eq!(kept.unwrap(), vec![&2, &4]);
    }

    #[tokio::test]
    async fn try_filter_propagates_predicate_error() {
        let items = [1, 2, 3];
        let result = try_filter_async(&items, |n| async move {
            if *n == 2 {
                Err(format!("cannot evaluate {n}"))
            } else {
                Ok(true)
            }
        })
        .await;
        assert_eq!(result, Err("cannot evaluate 2".to_string()));
    }
}

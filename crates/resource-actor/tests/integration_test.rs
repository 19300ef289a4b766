use async_trait::async_trait;
use resource_actor::{ActorEntity, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Counter {
    id: u32,
    label: String,
    value: i64,
}

#[derive(Debug)]
struct CounterCreate {
    label: String,
}

#[derive(Debug)]
struct CounterUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum CounterAction {
    /// Add only if the result stays non-negative; returns the new value.
    AddChecked(i64),
    Value,
}

#[derive(Debug, thiserror::Error)]
enum CounterError {
    #[error("Would go negative: current {current}, delta {delta}")]
    WouldGoNegative { current: i64, delta: i64 },
}

#[async_trait]
impl ActorEntity for Counter {
    type Id = u32;
    type Create = CounterCreate;
    type Update = CounterUpdate;
    type Action = CounterAction;
    type ActionResult = i64;
    type Context = ();
    type Error = CounterError;

    fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            value: 0,
        })
    }

    async fn on_update(
        &mut self,
        update: CounterUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CounterAction,
        _ctx: &Self::Context,
    ) -> Result<i64, Self::Error> {
        match action {
            CounterAction::AddChecked(delta) => {
                let next = self.value + delta;
                if next < 0 {
                    return Err(CounterError::WouldGoNegative {
                        current: self.value,
                        delta,
                    });
                }
                self.value = next;
                Ok(self.value)
            }
            CounterAction::Value => Ok(self.value),
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn full_lifecycle() {
    let (actor, client) = ResourceActor::<Counter>::new(10);
    tokio::spawn(actor.run(()));

    // Create
    let id: u32 = client
        .create(CounterCreate {
            label: "widgets".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // Action
    let value = client
        .perform_action(id, CounterAction::AddChecked(5))
        .await
        .unwrap();
    assert_eq!(value, 5);

    // A failing action leaves state untouched
    let err = client
        .perform_action(id, CounterAction::AddChecked(-7))
        .await;
    assert!(err.is_err());
    let value = client.perform_action(id, CounterAction::Value).await.unwrap();
    assert_eq!(value, 5);

    // Update
    let updated = client
        .update(
            id,
            CounterUpdate {
                label: Some("gadgets".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "gadgets");

    // List
    let second = client
        .create(CounterCreate {
            label: "sprockets".into(),
        })
        .await
        .unwrap();
    assert_eq!(second, 2);
    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 2);

    // Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn interleaved_conditional_actions_never_go_negative() {
    let (actor, client) = ResourceActor::<Counter>::new(32);
    tokio::spawn(actor.run(()));

    let id: u32 = client
        .create(CounterCreate {
            label: "stock".into(),
        })
        .await
        .unwrap();
    client
        .perform_action(id, CounterAction::AddChecked(10))
        .await
        .unwrap();

    // Two competing debits that together exceed the balance: exactly one wins,
    // because the actor serializes the check-and-mutate.
    let c1 = client.clone();
    let c2 = client.clone();
    let t1 = tokio::spawn(async move { c1.perform_action(id, CounterAction::AddChecked(-7)).await });
    let t2 = tokio::spawn(async move { c2.perform_action(id, CounterAction::AddChecked(-7)).await });

    let r1 = t1.await.unwrap();
    let r2 = t2.await.unwrap();
    assert!(r1.is_ok() != r2.is_ok(), "exactly one debit must succeed");

    let value = client.perform_action(id, CounterAction::Value).await.unwrap();
    assert_eq!(value, 3);
}

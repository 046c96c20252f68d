// src/common/ownership.rs

use uuid::Uuid;

use crate::common::error::AppError;

/// A resource that belongs to exactly one account.
///
/// Sites, transactions and investments carry the owning account id directly.
/// Projects and products resolve theirs through the chain project -> site ->
/// farmer, which the services walk before calling [`ensure_owner`].
pub trait Owned {
    fn owner_account_id(&self) -> Uuid;
}

/// Rejects the action with `denial` unless `actor_id` owns the resource.
pub fn ensure_owner<R: Owned>(
    actor_id: Uuid,
    resource: &R,
    denial: &'static str,
) -> Result<(), AppError> {
    if resource.owner_account_id() == actor_id {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(denial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plot {
        farmer_id: Uuid,
    }

    impl Owned for Plot {
        fn owner_account_id(&self) -> Uuid {
            self.farmer_id
        }
    }

    #[test]
    fn owner_passes_the_gate() {
        let farmer_id = Uuid::new_v4();
        let plot = Plot { farmer_id };
        assert!(ensure_owner(farmer_id, &plot, "denied").is_ok());
    }

    #[test]
    fn stranger_is_denied_with_the_given_message() {
        let plot = Plot { farmer_id: Uuid::new_v4() };
        let result = ensure_owner(Uuid::new_v4(), &plot, "You can only update your own sites.");
        match result {
            Err(AppError::PermissionDenied(message)) => {
                assert_eq!(message, "You can only update your own sites.");
            }
            other => panic!("expected PermissionDenied, got {other:?}"),
        }
    }
}

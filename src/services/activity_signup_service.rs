use sqlx::SqlitePool;
use tracing::info;

use crate::database::{activities_repo, activity_participants_repo};
use crate::error::ActivityError;

/// Off by default: rosters may grow past `max_participants` unless capacity is opted into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignupPolicy {
    /// Reject signups once the roster holds `max_participants` emails.
    pub enforce_capacity: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    SignedUp,
    Unregistered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterReceipt {
    pub change: RosterChange,
    pub activity_name: String,
    pub email: String,
}

impl RosterReceipt {
    pub fn message(&self) -> String {
        match self.change {
            RosterChange::SignedUp => {
                format!("Signed up {} for {}", self.email, self.activity_name)
            }
            RosterChange::Unregistered => {
                format!("Unregistered {} from {}", self.email, self.activity_name)
            }
        }
    }
}

/// Moves `email` from not registered to registered for `activity_name`.
///
/// Existence, duplicate and capacity checks run in the same transaction as
/// the insert.
pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
    policy: SignupPolicy,
) -> Result<RosterReceipt, ActivityError> {
    let mut tx = pool.begin().await?;

    let Some(activity) = activities_repo::load_activity_by_name(&mut *tx, activity_name).await?
    else {
        return Err(ActivityError::NotFound);
    };

    if activity_participants_repo::is_registered(&mut *tx, activity_name, email).await? {
        return Err(ActivityError::AlreadySignedUp);
    }

    if policy.enforce_capacity {
        let taken = activity_participants_repo::count_participants(&mut *tx, activity_name).await?;
        if taken >= activity.max_participants {
            return Err(ActivityError::ActivityFull);
        }
    }

    activity_participants_repo::insert_participant(&mut *tx, activity_name, email).await?;
    tx.commit().await?;

    info!("{} signed up for {}", email, activity_name);
    Ok(RosterReceipt {
        change: RosterChange::SignedUp,
        activity_name: activity_name.to_string(),
        email: email.to_string(),
    })
}

/// Moves `email` from registered back to not registered for `activity_name`.
pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<RosterReceipt, ActivityError> {
    if activities_repo::load_activity_by_name(pool, activity_name)
        .await?
        .is_none()
    {
        return Err(ActivityError::NotFound);
    }

    let removed =
        activity_participants_repo::delete_participant(pool, activity_name, email).await?;
    if removed == 0 {
        return Err(ActivityError::NotRegistered);
    }

    info!("{} unregistered from {}", email, activity_name);
    Ok(RosterReceipt {
        change: RosterChange::Unregistered,
        activity_name: activity_name.to_string(),
        email: email.to_string(),
    })
}

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::HashMap;

use crate::database::{activities_repo, activity_participants_repo};
use crate::error::ActivityError;
use crate::models::{ActivitiesRow, ActivityParticipantsRow};

/// JSON shape of one activity in `GET /activities`; the name is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

/// Activities keyed by name, in the order they were seeded.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDirectory(Vec<(String, ActivityView)>);

impl ActivityDirectory {
    pub fn get(&self, name: &str) -> Option<&ActivityView> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ActivityDirectory {
    type Item = (String, ActivityView);
    type IntoIter = std::vec::IntoIter<(String, ActivityView)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for ActivityDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, view) in &self.0 {
            map.serialize_entry(name, view)?;
        }
        map.end()
    }
}

/// Landing page card.
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
    pub spots_left: i64,
    pub is_full: bool,
}

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<ActivityDirectory> {
    let rows = activities_repo::list_activities(pool).await?;
    let participants = activity_participants_repo::list_all_participants(pool).await?;
    Ok(group_rosters(rows, participants))
}

pub async fn get_activity(pool: &SqlitePool, name: &str) -> Result<ActivityView, ActivityError> {
    let Some(row) = activities_repo::load_activity_by_name(pool, name).await? else {
        return Err(ActivityError::NotFound);
    };
    let participants = activity_participants_repo::list_participants(pool, name).await?;
    Ok(build_view(row, participants.into_iter().map(|p| p.email).collect()))
}

pub async fn load_activity_cards(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityCardView>> {
    let activities = list_activities(pool).await?;
    Ok(activities
        .into_iter()
        .map(|(name, view)| {
            let spots_left = (view.max_participants - view.participants.len() as i64).max(0);
            ActivityCardView {
                name,
                description: view.description,
                schedule: view.schedule,
                max_participants: view.max_participants,
                participants: view.participants,
                spots_left,
                is_full: spots_left == 0,
            }
        })
        .collect())
}

// Participant rows arrive in signup order, so pushing preserves roster order.
fn group_rosters(
    rows: Vec<ActivitiesRow>,
    participants: Vec<ActivityParticipantsRow>,
) -> ActivityDirectory {
    let mut rosters: HashMap<String, Vec<String>> = HashMap::new();
    for p in participants {
        rosters.entry(p.activity_name).or_default().push(p.email);
    }

    ActivityDirectory(
        rows.into_iter()
            .map(|row| {
                let roster = rosters.remove(&row.name).unwrap_or_default();
                (row.name.clone(), build_view(row, roster))
            })
            .collect(),
    )
}

fn build_view(row: ActivitiesRow, participants: Vec<String>) -> ActivityView {
    ActivityView {
        description: row.description,
        schedule: row.schedule,
        max_participants: row.max_participants,
        participants,
    }
}

use sqlx::SqlitePool;

pub struct SeedActivity {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: i64,
    pub participants: &'static [&'static str],
}

pub const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball",
        description: "Practice drills and play in the inter-school league",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Singles and doubles training on the school courts",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        max_participants: 10,
        participants: &["lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Rehearse and perform plays for the school community",
        schedule: "Wednesdays, 3:30 PM - 5:30 PM",
        max_participants: 25,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Explore painting, drawing and sculpture",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["amelia@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Hands-on experiments and science fair preparation",
        schedule: "Fridays, 3:30 PM - 4:30 PM",
        max_participants: 16,
        participants: &[],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Build public speaking skills and compete in debate tournaments",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["ethan@mergington.edu", "harper@mergington.edu"],
    },
];

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT OR IGNORE INTO activities (
  name,
  description,
  schedule,
  max_participants
) VALUES (?, ?, ?, ?)
"#;

const SQL_INSERT_SEED_PARTICIPANT: &str = r#"
INSERT OR IGNORE INTO activity_participants (
  activity_name,
  email
) VALUES (?, ?)
"#;

/// Loads [`SEED_ACTIVITIES`]. Activities already in the store keep their
/// current roster; seed participants only go into freshly created activities.
pub async fn seed_activities(pool: &SqlitePool) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    let mut created = 0;
    for activity in SEED_ACTIVITIES {
        let res = sqlx::query(SQL_INSERT_ACTIVITY)
            .bind(activity.name)
            .bind(activity.description)
            .bind(activity.schedule)
            .bind(activity.max_participants)
            .execute(&mut *tx)
            .await?;
        if res.rows_affected() == 0 {
            continue;
        }
        created += 1;

        for email in activity.participants {
            sqlx::query(SQL_INSERT_SEED_PARTICIPANT)
                .bind(activity.name)
                .bind(*email)
                .execute(&mut *tx)
                .await?;
        }
    }
    tx.commit().await?;
    tracing::debug!("seeded {} of {} activities", created, SEED_ACTIVITIES.len());
    Ok(())
}

use sqlx::SqlitePool;
use tracing::info;

use crate::database::activities_repo;

pub struct SeedActivity {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: i64,
    pub participants: &'static [&'static str],
}

// Fixed catalog used to initialize an empty store. Activities are created
// here and only here; no endpoint adds or deletes them.
pub const SEED_CATALOG: &[SeedActivity] = &[
    SeedActivity {
        name: "Basketball Team",
        description: "Join the school basketball team and compete in local tournaments",
        schedule: "Wednesdays and Fridays, 4:00 PM - 6:00 PM",
        max_participants: 15,
        participants: &[],
    },
    SeedActivity {
        name: "Swimming Club",
        description: "Practice swimming techniques and participate in meets",
        schedule: "Mondays and Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 10,
        participants: &[],
    },
    SeedActivity {
        name: "Art Workshop",
        description: "Explore painting, drawing, and sculpture with peers",
        schedule: "Tuesdays, 4:00 PM - 5:30 PM",
        max_participants: 18,
        participants: &[],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 20,
        participants: &[],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop argumentation skills and compete in debate tournaments",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &[],
    },
    SeedActivity {
        name: "Math Olympiad",
        description: "Prepare for math competitions and solve challenging problems",
        schedule: "Mondays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &[],
    },
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
];

// Inserts the catalog on first startup only; a non-empty store is left
// untouched, so restarts never duplicate activities or reset rosters.
pub async fn seed_if_empty(pool: &SqlitePool) -> sqlx::Result<()> {
    if activities_repo::count_activities(pool).await? > 0 {
        return Ok(());
    }

    for activity in SEED_CATALOG {
        let roster = serde_json::to_string(activity.participants)
            .expect("seed roster serializes to JSON");
        activities_repo::insert_if_absent(
            pool,
            activity.name,
            activity.description,
            activity.schedule,
            activity.max_participants,
            &roster,
        )
        .await?;
    }

    info!(
        activities = SEED_CATALOG.len(),
        "seeded activity catalog into empty store"
    );
    Ok(())
}

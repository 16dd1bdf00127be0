//! Initial workout schedule loaded on first deployment.

use sqlx::PgPool;

/// One fixed row of seed data.
#[derive(Debug, Clone, Copy)]
pub struct SeedWorkout {
    pub name: &'static str,
    pub location: &'static str,
    pub maps_url: &'static str,
    pub schedule: &'static str,
    pub event_type: &'static str,
}

/// The initial schedule, in display order. Row `i` gets `sort_order = i`.
pub const SEED_WORKOUTS: [SeedWorkout; 13] = [
    SeedWorkout {
        name: "Murph Monday",
        location: "Woodland Park (11th st Entrance)",
        maps_url: "https://goo.gl/maps/UEULdFoyEpTRwLLo9",
        schedule: "Monday: 5:25 AM - 6:15 AM",
        event_type: "Murph",
    },
    SeedWorkout {
        name: "The Phoenix",
        location: "Woodland Park (11th st Entrance)",
        maps_url: "https://goo.gl/maps/UEULdFoyEpTRwLLo9",
        schedule: "Monday: 5:30 AM - 6:15 AM",
        event_type: "Beatdown",
    },
    SeedWorkout {
        name: "The Arena",
        location: "Riverwalk Park (Basketball Court)",
        maps_url: "https://goo.gl/maps/8UenhCFvXi6KQFWaA",
        schedule: "Tuesday: 5:15 AM - 6:15 AM",
        event_type: "Ruck + Sandbag",
    },
    SeedWorkout {
        name: "Compass",
        location: "Columbia Public Square",
        maps_url: "https://goo.gl/maps/BvGZ49ycjCovcZbP6",
        schedule: "Tuesday: 5:30 AM - 6:15 AM",
        event_type: "Beatdown",
    },
    SeedWorkout {
        name: "Slag Mountain",
        location: "Maury County Park (Kiwanis Pavilion)",
        maps_url: "https://goo.gl/maps/ps3AKHmqueDevzQt7",
        schedule: "Wednesday: 5:20 AM - 6:15 AM",
        event_type: "Run",
    },
    SeedWorkout {
        name: "Iron Mule",
        location: "Maury County Park (Kids Kingdom)",
        maps_url: "https://goo.gl/maps/ps3AKHmqueDevzQt7",
        schedule: "Wednesday: 5:30 AM - 6:15 AM",
        event_type: "Weight Lifting",
    },
    SeedWorkout {
        name: "The Refuge",
        location: "Chickasaw Trace Park",
        maps_url: "https://goo.gl/maps/iQJLUJ5kk3hj7SwV9",
        schedule: "Thursday: 5:30 AM - 6:15 AM",
        event_type: "Trail Run",
    },
    SeedWorkout {
        name: "Ruck and Roll",
        location: "Riverwalk Park (Basketball Court)",
        maps_url: "https://goo.gl/maps/8UenhCFvXi6KQFWaA",
        schedule: "Thursday: 5:30 AM - 6:15 AM",
        event_type: "Ruck",
    },
    SeedWorkout {
        name: "Bedrock",
        location: "Riverwalk Park (Basketball Court)",
        maps_url: "https://goo.gl/maps/8UenhCFvXi6KQFWaA",
        schedule: "Friday: 5:15 AM - 6:15 AM (closed third Friday each month)",
        event_type: "Sandbag",
    },
    SeedWorkout {
        name: "The Challenge",
        location: "Columbia State Community College",
        maps_url: "https://goo.gl/maps/Rv4udm1mpBXZFdGy8",
        schedule: "Friday: 5:30 AM - 6:15 AM (closed third Friday each month)",
        event_type: "Beatdown",
    },
    SeedWorkout {
        name: "Outpost",
        location: "Maury County Park (Monsanto Pavilion)",
        maps_url: "https://goo.gl/maps/j3YiN4xen7mRy8RK8",
        schedule: "Every Third Friday: 5:15 AM - 6:15 AM",
        event_type: "3rd F (Faith)",
    },
    SeedWorkout {
        name: "Darkhorse",
        location: "Riverwalk Park (Basketball Court)",
        maps_url: "https://goo.gl/maps/8UenhCFvXi6KQFWaA",
        schedule: "Saturday: 6:00 AM - 7:00 AM",
        event_type: "Beatdown",
    },
    SeedWorkout {
        name: "Hawkeye",
        location: "Hampshire School",
        maps_url: "https://maps.app.goo.gl/hpiKvFLT1iGJVwGG8",
        schedule: "Saturday: 6:00 AM - 7:00 AM (closed last Saturday each month)",
        event_type: "Beatdown",
    },
];

/// What [`seed_workouts`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and this many rows were inserted.
    Inserted(usize),
    /// The table already held this many rows; nothing was written.
    Skipped(i64),
}

/// Insert [`SEED_WORKOUTS`] with `sort_order` 0..=12 if the table is empty.
///
/// Runs in a single transaction so a failed seed leaves no partial rows.
pub async fn seed_workouts(pool: &PgPool) -> Result<SeedOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM workouts")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::info!(existing, "Workouts table not empty, skipping seed");
        return Ok(SeedOutcome::Skipped(existing));
    }

    for (sort_order, workout) in (0_i32..).zip(SEED_WORKOUTS.iter()) {
        sqlx::query(
            "INSERT INTO workouts (name, location, maps_url, schedule, event_type, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(workout.name)
        .bind(workout.location)
        .bind(workout.maps_url)
        .bind(workout.schedule)
        .bind(workout.event_type)
        .bind(sort_order)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(count = SEED_WORKOUTS.len(), "Seeded workouts");
    Ok(SeedOutcome::Inserted(SEED_WORKOUTS.len()))
}

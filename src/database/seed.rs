use crate::models::{Activity, ActivityName};

/// Catalog loaded at startup.
pub fn mergington_activities() -> Vec<(ActivityName, Activity)> {
    vec![
        (
            ActivityName::new("Chess Club"),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            ActivityName::new("Programming Class"),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            ActivityName::new("Gym Class"),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            ActivityName::new("Basketball"),
            Activity::new(
                "Join the school basketball team and compete in local tournaments",
                "Wednesdays and Fridays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(&["liam@mergington.edu"]),
        ),
        (
            ActivityName::new("Tennis"),
            Activity::new(
                "Develop tennis skills and play friendly matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                10,
            )
            .with_participants(&["ava@mergington.edu"]),
        ),
        (
            ActivityName::new("Art Club"),
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(&["mia@mergington.edu"]),
        ),
        (
            ActivityName::new("Drama Club"),
            Activity::new(
                "Act, direct and produce the school plays",
                "Wednesdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(&["noah@mergington.edu"]),
        ),
        (
            ActivityName::new("Science Olympiad"),
            Activity::new(
                "Prepare for regional science competitions",
                "Thursdays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(&["isabella@mergington.edu"]),
        ),
        (
            ActivityName::new("Debate Team"),
            Activity::new(
                "Sharpen public speaking and argue current topics",
                "Tuesdays, 4:00 PM - 5:30 PM",
                14,
            )
            .with_participants(&["lucas@mergington.edu"]),
        ),
    ]
}

//! Built-in place catalog used when `--catalog` is not given.

// Columns: place,label,category,location,stay_minutes,travel_minutes.
// Empty stay/travel cells fall back to the planner config defaults.
pub const CATALOG_CSV: &str = "\
place,label,category,location,stay_minutes,travel_minutes\n\
Blue Bottle Coffee,Morning coffee,cafe,Seongsu,60,15\n\
Seoul Forest,Walk in the park,park,Seongsu,90,20\n\
Ttukseom Hangang Park,Picnic by the river,park,Jayang,60,\n\
Common Ground,Container mall,shopping,Konkuk Univ.,,10\n\
Jungsik,Dinner,restaurant,Cheongdam,120,\n\
";

/// Places visited by the demo session, in the order they are selected.
pub const DEMO_ROUTE: [&str; 3] = ["Blue Bottle Coffee", "Seoul Forest", "Ttukseom Hangang Park"];

pub mod frame;
pub mod natal;
pub mod report;

pub use frame::{
    ascendant, compute_chart_frame, house_cusps, midheaven, ChartFrame, HouseCusps,
    EARTH_OBLIQUITY,
};
pub use natal::{BodyPlacement, ChartSettings, NatalChart};
pub use report::{aspect_lines, placement_line, render_report};

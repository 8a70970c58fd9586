pub mod player;
pub mod raw;
pub mod records;

pub use player::{PlayerId, Position};
pub use raw::{RawIdRow, RawPositions, RawRosterRow, RawSeasonRow, RawTables, RawTotals, RawWeekRow};
pub use records::{RosterEntry, SeasonRecord, StatTotals, WeekRecord};

pub mod difference;
pub mod difference_set;

pub use difference::{
    Bounds, ChangeType, DifferenceBody, DifferenceId, DifferenceRecord, DifferenceType,
};
pub use difference_set::{DifferenceSet, SourceList, UniqueRecords};

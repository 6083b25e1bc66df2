// Architecture performance model: partitioning, blocking, cycle
// simulation, aggregation and design-space enumeration

pub mod architecture;
pub mod blocking;
pub mod config;
pub mod cycles;
pub mod error;
pub mod explore;
pub mod partition;
pub mod space;

pub use architecture::{ModelEstimate, PartitionEstimate, SpmvArchitecture};
pub use blocking::{block_partition, BlockingResult, PackedEntry};
pub use config::{ArchConfig, ResourceUsage};
pub use cycles::CyclePolicy;
pub use error::ModelError;
pub use explore::{best_by_cycles, sweep, sweep_parallel, SweepPoint};
pub use partition::{column_ranges, partition_columns};
pub use space::ArchSpace;

use spmv_model::{
    best_by_cycles, sweep, ArchSpace, CyclePolicy, ModelError, PatternMatrixGenerator, Range,
    SpmvArchitecture,
};

fn main() -> Result<(), ModelError> {
    println!("spmv-model: streaming SpMV accelerator performance model");

    // A banded test matrix: order 512, 9 non-zeros around the diagonal
    let mat = PatternMatrixGenerator::new(42).banded(512, 9);
    println!("\nWorkload: {} x {} matrix, {} non-zeros", mat.n_rows, mat.n_cols, mat.nnz());

    // Evaluate one configuration under each timing policy
    println!("\nSingle configuration, all policies:");
    for policy in [CyclePolicy::Simple, CyclePolicy::Fst, CyclePolicy::SkipEmptyRows] {
        let arch = SpmvArchitecture::new(2048, 48, 2, policy)?;
        let est = arch.preprocess(&mat)?;
        println!("  {}", est);
    }

    // Per-block detail for one architecture
    let arch = SpmvArchitecture::new(2048, 48, 2, CyclePolicy::SkipEmptyRows)?;
    let est = arch.preprocess(&mat)?;
    println!("\nBlock summaries for {}:", est.name());
    for (pipe, part) in est.partitions().iter().enumerate() {
        println!("Pipe {} (columns {}..{}):", pipe, part.cols.start, part.cols.end);
        for block in &part.blocks {
            print!("{}", block);
        }
    }
    let usage = est.resource_usage();
    println!("Resource usage: {} BRAMs", usage.brams);

    // A reduced design-space sweep
    let mut space = ArchSpace::new(
        Range::new(1, 4, 1)?,
        Range::new(8, 64, 8)?,
        Range::new(1024, 4096, 1024)?,
        CyclePolicy::SkipEmptyRows,
    );
    println!("\nSweeping {} architectures...", space.len());
    let points = sweep(&mut space, &mat)?;

    if let Some(best) = best_by_cycles(&points) {
        println!("Best point by estimated cycles:");
        println!("  {}", best.estimate);
    }

    Ok(())
}

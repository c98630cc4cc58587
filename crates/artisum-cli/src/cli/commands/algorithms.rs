//! Algorithms command: list registered checksum algorithms.

use artisum_core::checksum::ChecksumAlgorithmFactorySelector;

pub fn run_algorithms() {
    let mut names: Vec<String> = ChecksumAlgorithmFactorySelector::global()
        .supported_names()
        .into_iter()
        .collect();
    names.sort();
    for name in names {
        println!("{}", name);
    }
}

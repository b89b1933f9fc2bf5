/// Stores are for loading/storing different kinds of data.
///
/// Currently, all stores are just simple files, mostly CSV.
///
/// Example store backends:
/// * Files (e.g. CSV).
/// * Remote (e.g. REST).
/// * Databases.
/// * Etc.
pub mod assignments;
pub mod csv;
pub mod reference;

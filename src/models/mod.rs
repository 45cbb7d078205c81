pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod specialties;

mod appointment;
mod patient;
mod veterinarian;

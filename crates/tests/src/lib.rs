#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod job_board_tests;

#[cfg(test)]
mod employer_job_tests;

#[cfg(test)]
mod applicant_tests;

#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod property_tests;

#[cfg(test)]
mod scenario_tests;

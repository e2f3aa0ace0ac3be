pub(crate) mod alerts;
pub(crate) mod blogs;
pub(crate) mod glossary;
pub(crate) mod health;
pub(crate) mod stats;
pub(crate) mod summaries;

#[cfg(test)]
pub(crate) mod testing;

pub(crate) mod diagnose;
pub mod lexicon;

pub(crate) mod names {
    pub(crate) mod helpers;
    pub(crate) mod predicates;
    pub(crate) mod strategies;

    #[cfg(test)]
    mod tests;
}

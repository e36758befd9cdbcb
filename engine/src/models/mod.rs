//! Domain types (Decisionmaker, DecisionmakerPool, CaseRecord)

pub mod case;
pub mod decisionmaker;

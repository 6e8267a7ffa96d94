//! Name and portrait sourcing for generated characters

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{AgeBand, Name, Sex};

/// Supplies the identity details the core does not decide itself.
pub trait IdentitySource {
    fn name<R: Rng + ?Sized>(&self, sex: Sex, rng: &mut R) -> Name;

    /// Portrait asset for a character, if the source has any.
    fn portrait(&self, _sex: Sex, _age: AgeBand) -> Option<String> {
        None
    }
}

/// Built-in name lists, no portraits.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockIdentities;

impl IdentitySource for StockIdentities {
    fn name<R: Rng + ?Sized>(&self, sex: Sex, rng: &mut R) -> Name {
        let sex = match sex {
            Sex::Unknown if rng.gen_bool(0.5) => Sex::Male,
            Sex::Unknown => Sex::Female,
            known => known,
        };
        let given_names = match sex {
            Sex::Female => FEMALE_NAMES,
            _ => MALE_NAMES,
        };
        let given = given_names.choose(rng).copied().unwrap_or("John");
        let family = FAMILY_NAMES.choose(rng).copied().unwrap_or("Doe");

        Name::new(given, family)
    }
}

static MALE_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Joseph", "Charles", "Thomas",
    "Daniel", "Wei", "Pavel", "Carlos", "Kenji", "Raj", "Dmitri", "Hassan", "Sven", "Omar",
    "Diego", "Hiroshi", "Malcolm", "Cesar", "Harvey", "Bayard", "Eugene", "Howard", "Ralph",
];

static FEMALE_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Sarah", "Yuki",
    "Aisha", "Ingrid", "Fatima", "Olga", "Amara", "Elena", "Priya", "Akiko", "Katya", "Nadia",
    "Leila", "Rosa", "Emma", "Dolores", "Angela", "Gloria", "Harriet", "Sojourner", "Rachel",
];

static FAMILY_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Wilson", "Taylor",
    "Anderson", "Jackson", "White", "Harris", "Martin", "Thompson", "Chen", "Nakamura", "Patel",
    "Ivanov", "Mueller", "Garcia", "Kim", "Okonkwo", "Johansson", "Ali", "Nguyen", "Kowalski",
    "Santos", "Singh", "Rodriguez", "Park", "Ahmed", "O'Brien", "Van der Berg", "De Silva",
    "Al-Rashid", "St. Claire",
];

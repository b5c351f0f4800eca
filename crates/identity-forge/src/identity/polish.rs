//! Polish name and place tables.
//!
//! The `fake` crate ships no Polish locale, so Polish identities draw from
//! these small tables instead.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::IdentityError;

pub(super) const FIRST_NAMES: &[&str] = &[
    "Agnieszka",
    "Aleksander",
    "Anna",
    "Bartłomiej",
    "Dorota",
    "Grzegorz",
    "Jadwiga",
    "Jakub",
    "Katarzyna",
    "Łukasz",
    "Małgorzata",
    "Mikołaj",
    "Zofia",
    "Paweł",
    "Wojciech",
    "Żaneta",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Nowak",
    "Kowalski",
    "Wiśniewska",
    "Wójcik",
    "Kowalczyk",
    "Kamińska",
    "Lewandowski",
    "Zielińska",
    "Szymański",
    "Woźniak",
    "Dąbrowski",
    "Kozłowska",
    "Jankowski",
    "Mazur",
];

pub(super) const STREETS: &[&str] = &[
    "Kwiatowa",
    "Leśna",
    "Słoneczna",
    "Polna",
    "Ogrodowa",
    "Lipowa",
    "Brzozowa",
    "Łąkowa",
    "Kościuszki",
    "Mickiewicza",
    "Piłsudskiego",
    "Żeromskiego",
];

pub(super) const CITIES: &[&str] = &[
    "Warszawa",
    "Kraków",
    "Łódź",
    "Wrocław",
    "Poznań",
    "Gdańsk",
    "Szczecin",
    "Bydgoszcz",
    "Lublin",
    "Białystok",
    "Katowice",
    "Rzeszów",
    "Łomża",
];

pub(super) const VOIVODESHIPS: &[&str] = &[
    "dolnośląskie",
    "kujawsko-pomorskie",
    "lubelskie",
    "lubuskie",
    "łódzkie",
    "małopolskie",
    "mazowieckie",
    "opolskie",
    "podkarpackie",
    "podlaskie",
    "pomorskie",
    "śląskie",
    "świętokrzyskie",
    "warmińsko-mazurskie",
    "wielkopolskie",
    "zachodniopomorskie",
];

/// Picks one entry from a named table.
pub(super) fn pick<R: Rng + ?Sized>(
    rng: &mut R,
    table: &[&str],
    dataset: &'static str,
) -> Result<String, IdentityError> {
    table
        .choose(rng)
        .map(|entry| (*entry).to_owned())
        .ok_or(IdentityError::EmptyDataset { dataset })
}

//! Identity providers: region-formatted names, addresses and phone numbers.
//!
//! The synthesizer only needs *some* provider that is a pure function of
//! region and seed. [`FakerIdentityProvider`] is the default one, built on the
//! `fake` crate for English and German data and on built-in tables for Polish.

mod polish;

use fake::faker::address::raw::{BuildingNumber, CityName, StateAbbr, StateName, StreetName, ZipCode};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::{DE_DE, EN};
use fake::{Dummy, Fake};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

use crate::error::IdentityError;
use crate::region::{AddressParts, PhoneNumber, Region};

/// A freshly generated, already formatted identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityBundle {
    /// Opaque unique identifier.
    pub identifier: Uuid,
    /// First, middle and last name joined by single spaces.
    pub name: String,
    /// Address in the region's field order and punctuation.
    pub address: String,
    /// Phone number with the region's prefix and grouping.
    pub phone: String,
}

/// Source of identity bundles.
///
/// Implementations must be pure: the same region and seed always produce the
/// same bundle (or the same error). Record reproducibility depends on it.
pub trait IdentityProvider: Sync {
    /// Produces the identity for a region and seed.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] when the provider cannot produce an identity
    /// for these inputs.
    fn identity(&self, region: Region, seed: i32) -> Result<IdentityBundle, IdentityError>;
}

/// Name and address parts before they are joined into a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IdentityParts {
    first: String,
    middle: String,
    last: String,
    address: AddressParts,
    phone: PhoneNumber,
}

impl IdentityParts {
    fn into_bundle(self, region: Region, identifier: Uuid) -> IdentityBundle {
        IdentityBundle {
            identifier,
            name: format!("{} {} {}", self.first, self.middle, self.last),
            address: region.format_address(&self.address),
            phone: region.format_phone(&self.phone),
        }
    }
}

/// Default provider backed by the `fake` crate.
///
/// # Example
///
/// ```
/// use identity_forge::{FakerIdentityProvider, IdentityProvider, Region};
///
/// let provider = FakerIdentityProvider;
/// let first = provider.identity(Region::Germany, 1234).expect("identity");
/// let second = provider.identity(Region::Germany, 1234).expect("identity");
///
/// assert_eq!(first, second);
/// assert!(first.phone.starts_with("+49-"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerIdentityProvider;

impl IdentityProvider for FakerIdentityProvider {
    fn identity(&self, region: Region, seed: i32) -> Result<IdentityBundle, IdentityError> {
        let mut rng = ChaCha8Rng::seed_from_u64(widen_seed(seed));
        let identifier = Builder::from_random_bytes(rng.random()).into_uuid();
        let parts = match region {
            Region::Usa => locale_parts(EN, region, &mut rng),
            Region::Germany => locale_parts(DE_DE, region, &mut rng),
            Region::Poland => polish_parts(&mut rng)?,
        };
        Ok(parts.into_bundle(region, identifier))
    }
}

/// Maps an `i32` seed one-to-one onto `u64`.
fn widen_seed(seed: i32) -> u64 {
    i64::from(seed).abs_diff(i64::from(i32::MIN))
}

fn locale_parts<L>(locale: L, region: Region, rng: &mut ChaCha8Rng) -> IdentityParts
where
    L: Copy,
    String: Dummy<FirstName<L>>
        + Dummy<LastName<L>>
        + Dummy<StreetName<L>>
        + Dummy<BuildingNumber<L>>
        + Dummy<CityName<L>>
        + Dummy<StateName<L>>
        + Dummy<StateAbbr<L>>
        + Dummy<ZipCode<L>>,
{
    let first: String = FirstName(locale).fake_with_rng(rng);
    let middle: String = FirstName(locale).fake_with_rng(rng);
    let last: String = LastName(locale).fake_with_rng(rng);

    let street_name: String = StreetName(locale).fake_with_rng(rng);
    let building: String = BuildingNumber(locale).fake_with_rng(rng);
    let city: String = CityName(locale).fake_with_rng(rng);
    // US addresses use postal abbreviations, German ones spell the state out.
    let state: String = match region {
        Region::Usa => StateAbbr(locale).fake_with_rng(rng),
        Region::Germany | Region::Poland => StateName(locale).fake_with_rng(rng),
    };
    let raw_zip: String = ZipCode(locale).fake_with_rng(rng);
    let zip = match region {
        Region::Usa => us_zip(&raw_zip),
        Region::Germany | Region::Poland => raw_zip,
    };

    IdentityParts {
        first,
        middle,
        last,
        address: AddressParts {
            street: region.format_street(&street_name, &building),
            city,
            state,
            zip,
        },
        phone: phone_digits(rng),
    }
}

/// Left-pads a numeric zip to the five digits US addresses use.
fn us_zip(raw: &str) -> String {
    format!("{raw:0>5}")
}

fn polish_parts(rng: &mut ChaCha8Rng) -> Result<IdentityParts, IdentityError> {
    let first = polish::pick(rng, polish::FIRST_NAMES, "polish first names")?;
    let middle = polish::pick(rng, polish::FIRST_NAMES, "polish first names")?;
    let last = polish::pick(rng, polish::LAST_NAMES, "polish last names")?;

    let street_name = polish::pick(rng, polish::STREETS, "polish streets")?;
    let building = rng.random_range(1..=200_u16).to_string();
    let city = polish::pick(rng, polish::CITIES, "polish cities")?;
    let state = polish::pick(rng, polish::VOIVODESHIPS, "polish voivodeships")?;
    let zip = format!("{}-{}", digits(rng, 2), digits(rng, 3));

    Ok(IdentityParts {
        first,
        middle,
        last,
        address: AddressParts {
            street: Region::Poland.format_street(&street_name, &building),
            city,
            state,
            zip,
        },
        phone: phone_digits(rng),
    })
}

fn phone_digits<R: Rng + ?Sized>(rng: &mut R) -> PhoneNumber {
    PhoneNumber {
        area: digits(rng, 3),
        exchange: digits(rng, 3),
        line: digits(rng, 4),
    }
}

fn digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10_u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    //! Covers the default provider's formats and purity.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Region::Usa)]
    #[case(Region::Germany)]
    #[case(Region::Poland)]
    fn provider_is_pure(#[case] region: Region) {
        let provider = FakerIdentityProvider;
        for seed in [i32::MIN, -1, 0, 1, 392_331_000, i32::MAX] {
            let first = provider.identity(region, seed).expect("identity");
            let second = provider.identity(region, seed).expect("identity");
            assert_eq!(first, second, "seed {seed} in {region}");
        }
    }

    #[rstest]
    #[case(Region::Usa)]
    #[case(Region::Germany)]
    #[case(Region::Poland)]
    fn names_have_three_space_separated_parts(#[case] region: Region) {
        let bundle = FakerIdentityProvider.identity(region, 99).expect("identity");
        // Some locale entries contain spaces themselves.
        assert!(bundle.name.split(' ').count() >= 3, "name: {}", bundle.name);
        assert!(!bundle.name.contains("  "));
    }

    #[rstest]
    #[case(Region::Usa, "(+1) ")]
    #[case(Region::Germany, "+49-")]
    #[case(Region::Poland, "+48-")]
    fn phones_follow_region_layout(#[case] region: Region, #[case] prefix: &str) {
        for seed in 0..20 {
            let bundle = FakerIdentityProvider
                .identity(region, seed)
                .expect("identity");
            let rest = bundle
                .phone
                .strip_prefix(prefix)
                .unwrap_or_else(|| panic!("unexpected phone {}", bundle.phone));
            let groups: Vec<&str> = rest.split('-').collect();
            let lengths: Vec<usize> = groups.iter().map(|group| group.len()).collect();
            assert_eq!(lengths, vec![3, 3, 4]);
            assert!(groups.iter().all(|group| group.chars().all(|c| c.is_ascii_digit())));
        }
    }

    #[test]
    fn german_addresses_have_no_commas() {
        for seed in 0..20 {
            let bundle = FakerIdentityProvider
                .identity(Region::Germany, seed)
                .expect("identity");
            assert!(!bundle.address.contains(','), "address: {}", bundle.address);
        }
    }

    #[rstest]
    #[case(Region::Usa)]
    #[case(Region::Poland)]
    fn comma_regions_use_three_address_segments(#[case] region: Region) {
        let bundle = FakerIdentityProvider.identity(region, 5).expect("identity");
        assert!(bundle.address.split(", ").count() >= 3, "address: {}", bundle.address);
    }

    #[test]
    fn polish_addresses_use_street_prefix_and_postal_code() {
        let bundle = FakerIdentityProvider
            .identity(Region::Poland, 11)
            .expect("identity");
        assert!(bundle.address.starts_with("ul. "));
        let postal = bundle
            .address
            .rsplit(' ')
            .next()
            .expect("postal code segment");
        let (head, tail) = postal.split_once('-').expect("NN-NNN postal code");
        assert_eq!((head.len(), tail.len()), (2, 3));
    }

    #[test]
    fn us_addresses_end_in_five_digit_zip() {
        for seed in 0..50 {
            let bundle = FakerIdentityProvider
                .identity(Region::Usa, seed)
                .expect("identity");
            let zip = bundle.address.rsplit(' ').next().expect("zip segment");
            assert_eq!(zip.len(), 5, "address: {}", bundle.address);
            assert!(zip.chars().all(|c| c.is_ascii_digit()), "address: {}", bundle.address);
        }
    }

    #[rstest]
    #[case("559", "00559")]
    #[case("0254", "00254")]
    #[case("62704", "62704")]
    fn us_zip_pads_to_five_digits(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(us_zip(raw), expected);
    }

    #[test]
    fn identifiers_are_random_uuids() {
        let bundle = FakerIdentityProvider.identity(Region::Usa, 1).expect("identity");
        assert_eq!(bundle.identifier.get_version_num(), 4);
    }

    #[test]
    fn different_seeds_yield_different_identifiers() {
        let provider = FakerIdentityProvider;
        let first = provider.identity(Region::Usa, 1).expect("identity");
        let second = provider.identity(Region::Usa, 2).expect("identity");
        assert_ne!(first.identifier, second.identifier);
    }

    #[test]
    fn seed_widening_is_order_preserving() {
        assert_eq!(widen_seed(i32::MIN), 0);
        assert_eq!(widen_seed(-1), 2_147_483_647);
        assert_eq!(widen_seed(0), 2_147_483_648);
        assert_eq!(widen_seed(i32::MAX), 4_294_967_295);
    }
}

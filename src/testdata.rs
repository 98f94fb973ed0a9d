//! Shared fixtures: the 118 elements in the shape the data server emits.
//!
//! Lanthanum and actinium carry no group or period, cerium through lutetium
//! carry only a period, thorium through lawrencium carry group 3 and period 7.
//! That mix matches what real CSV exports of the table look like.

use crate::element::{ElementRecord, ElementTable};

const ELEMENTS: [(&str, &str); 118] = [
    ("H", "Hydrogen"), ("He", "Helium"), ("Li", "Lithium"), ("Be", "Beryllium"),
    ("B", "Boron"), ("C", "Carbon"), ("N", "Nitrogen"), ("O", "Oxygen"),
    ("F", "Fluorine"), ("Ne", "Neon"), ("Na", "Sodium"), ("Mg", "Magnesium"),
    ("Al", "Aluminum"), ("Si", "Silicon"), ("P", "Phosphorus"), ("S", "Sulfur"),
    ("Cl", "Chlorine"), ("Ar", "Argon"), ("K", "Potassium"), ("Ca", "Calcium"),
    ("Sc", "Scandium"), ("Ti", "Titanium"), ("V", "Vanadium"), ("Cr", "Chromium"),
    ("Mn", "Manganese"), ("Fe", "Iron"), ("Co", "Cobalt"), ("Ni", "Nickel"),
    ("Cu", "Copper"), ("Zn", "Zinc"), ("Ga", "Gallium"), ("Ge", "Germanium"),
    ("As", "Arsenic"), ("Se", "Selenium"), ("Br", "Bromine"), ("Kr", "Krypton"),
    ("Rb", "Rubidium"), ("Sr", "Strontium"), ("Y", "Yttrium"), ("Zr", "Zirconium"),
    ("Nb", "Niobium"), ("Mo", "Molybdenum"), ("Tc", "Technetium"), ("Ru", "Ruthenium"),
    ("Rh", "Rhodium"), ("Pd", "Palladium"), ("Ag", "Silver"), ("Cd", "Cadmium"),
    ("In", "Indium"), ("Sn", "Tin"), ("Sb", "Antimony"), ("Te", "Tellurium"),
    ("I", "Iodine"), ("Xe", "Xenon"), ("Cs", "Cesium"), ("Ba", "Barium"),
    ("La", "Lanthanum"), ("Ce", "Cerium"), ("Pr", "Praseodymium"), ("Nd", "Neodymium"),
    ("Pm", "Promethium"), ("Sm", "Samarium"), ("Eu", "Europium"), ("Gd", "Gadolinium"),
    ("Tb", "Terbium"), ("Dy", "Dysprosium"), ("Ho", "Holmium"), ("Er", "Erbium"),
    ("Tm", "Thulium"), ("Yb", "Ytterbium"), ("Lu", "Lutetium"), ("Hf", "Hafnium"),
    ("Ta", "Tantalum"), ("W", "Tungsten"), ("Re", "Rhenium"), ("Os", "Osmium"),
    ("Ir", "Iridium"), ("Pt", "Platinum"), ("Au", "Gold"), ("Hg", "Mercury"),
    ("Tl", "Thallium"), ("Pb", "Lead"), ("Bi", "Bismuth"), ("Po", "Polonium"),
    ("At", "Astatine"), ("Rn", "Radon"), ("Fr", "Francium"), ("Ra", "Radium"),
    ("Ac", "Actinium"), ("Th", "Thorium"), ("Pa", "Protactinium"), ("U", "Uranium"),
    ("Np", "Neptunium"), ("Pu", "Plutonium"), ("Am", "Americium"), ("Cm", "Curium"),
    ("Bk", "Berkelium"), ("Cf", "Californium"), ("Es", "Einsteinium"), ("Fm", "Fermium"),
    ("Md", "Mendelevium"), ("No", "Nobelium"), ("Lr", "Lawrencium"), ("Rf", "Rutherfordium"),
    ("Db", "Dubnium"), ("Sg", "Seaborgium"), ("Bh", "Bohrium"), ("Hs", "Hassium"),
    ("Mt", "Meitnerium"), ("Ds", "Darmstadtium"), ("Rg", "Roentgenium"), ("Cn", "Copernicium"),
    ("Nh", "Nihonium"), ("Fl", "Flerovium"), ("Mc", "Moscovium"), ("Lv", "Livermorium"),
    ("Ts", "Tennessine"), ("Og", "Oganesson"),
];

/// (group, period) as a typical dataset reports them.
fn reported_position(z: u16) -> (Option<u8>, Option<u8>) {
    let (period, first) = match z {
        1..=2 => (1, 1),
        3..=10 => (2, 3),
        11..=18 => (3, 11),
        19..=36 => (4, 19),
        37..=54 => (5, 37),
        55..=86 => (6, 55),
        _ => (7, 87),
    };
    let offset = (z - first) as u8;
    let group = match (period, z) {
        (1, 1) => 1,
        (1, _) => 18,
        (2 | 3, _) if offset < 2 => offset + 1,
        (2 | 3, _) => offset + 11,
        (4 | 5, _) => offset + 1,
        (6, 57) | (7, 89) => return (None, None),
        (6, 58..=71) => return (None, Some(6)),
        (7, 90..=103) => return (Some(3), Some(7)),
        (_, _) if offset < 2 => offset + 1,
        // Hf / Rf sit in group 4, 14 slots after Cs / Fr because of the f-block
        (_, _) => offset - 14 + 1,
    };
    (Some(group), Some(period))
}

fn category(z: u16) -> &'static str {
    match z {
        3 | 11 | 19 | 37 | 55 | 87 => "alkali metal",
        4 | 12 | 20 | 38 | 56 | 88 => "alkaline earth metal",
        2 | 10 | 18 | 36 | 54 | 86 => "noble gas",
        9 | 17 | 35 | 53 | 85 => "halogen",
        5 | 14 | 32 | 33 | 51 | 52 => "metalloid",
        1 | 6 | 7 | 8 | 15 | 16 | 34 => "nonmetal",
        57..=71 => "lanthanide",
        89..=103 => "actinide",
        21..=30 | 39..=48 | 72..=80 | 104..=112 => "transition metal",
        113..=118 => "unknown",
        _ => "post-transition metal",
    }
}

pub(crate) fn full_records() -> Vec<ElementRecord> {
    ELEMENTS
        .iter()
        .enumerate()
        .map(|(idx, (symbol, name))| {
            let z = idx as u16 + 1;
            let (group, period) = reported_position(z);
            let mut record = ElementRecord::new(z, *symbol, *name);
            record.group = group;
            record.period = period;
            record.category = Some(category(z).to_string());
            if z == 1 {
                record.atomic_mass = Some(1.008);
                record.electronegativity = Some(2.2);
                record.atomic_radius = Some(53.0);
                record.melting_point = Some(14.01);
                record.boiling_point = Some(20.28);
            }
            record
        })
        .collect()
}

pub(crate) fn full_table() -> ElementTable {
    ElementTable::from_records(full_records())
}

#[test]
fn fixture_positions_are_standard() {
    let table = full_table();
    assert_eq!(table.len(), 118);
    let pos = |sym: &str| {
        let r = table.by_symbol(sym).unwrap();
        (r.group, r.period)
    };
    assert_eq!(pos("H"), (Some(1), Some(1)));
    assert_eq!(pos("He"), (Some(18), Some(1)));
    assert_eq!(pos("B"), (Some(13), Some(2)));
    assert_eq!(pos("Ar"), (Some(18), Some(3)));
    assert_eq!(pos("Fe"), (Some(8), Some(4)));
    assert_eq!(pos("Xe"), (Some(18), Some(5)));
    assert_eq!(pos("Ba"), (Some(2), Some(6)));
    assert_eq!(pos("Hf"), (Some(4), Some(6)));
    assert_eq!(pos("Rn"), (Some(18), Some(6)));
    assert_eq!(pos("Rf"), (Some(4), Some(7)));
    assert_eq!(pos("Og"), (Some(18), Some(7)));
    assert_eq!(pos("La"), (None, None));
    assert_eq!(pos("Ce"), (None, Some(6)));
}

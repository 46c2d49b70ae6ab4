use crate::{
    attribute_byte, is_usable_color, nametable, nametables, oam, palette_ram, random_color,
    sprite, Sprite, Theme, ATTRIBUTE_SIZE, NAMETABLE_COLS, NAMETABLE_SIZE, OAM_SIZE, OFFSCREEN_Y,
    PALETTE_RAM_SIZE, SPRITES,
};
use rand::{rngs::StdRng, SeedableRng};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn palette_layout() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let ram = palette_ram(&mut rng);
        assert!(ram.len() == PALETTE_RAM_SIZE, "Wrong size {}", ram.len());

        for (idx, palette) in ram.chunks(4).enumerate() {
            assert!(
                palette[0] == 0x21,
                "seed {seed}: palette {idx} background is {:#04X}",
                palette[0]
            );
        }
        assert!(
            ram[1..4] == [0x20, 0x0D, 0x0D],
            "seed {seed}: palette 0 is {:02X?}",
            &ram[0..4]
        );
        assert!(
            ram[17..20] == [0x15, 0x35, 0x17],
            "seed {seed}: palette 4 is {:02X?}",
            &ram[16..20]
        );
        for (idx, val) in ram.iter().enumerate() {
            if idx % 4 == 0 || idx / 4 == 0 || idx / 4 == 4 {
                continue;
            }
            assert!(
                (1..=60).contains(val) && (1..=12).contains(&(val % 16)),
                "seed {seed}: random color {val:#04X} at {idx} not usable"
            );
        }
    }
}

#[test]
fn usable_colors() {
    for val in 0..=255u8 {
        let want = !matches!(val % 16, 0 | 13 | 14 | 15);
        assert!(
            is_usable_color(val) == want,
            "{val:#04X} usable should be {want}"
        );
    }
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        let c = random_color(&mut rng);
        assert!(
            is_usable_color(c) && (1..=60).contains(&c),
            "random_color returned {c:#04X}"
        );
    }
}

#[test]
fn sprites() {
    let ram = oam();
    assert!(ram.len() == OAM_SIZE, "OAM size {}", ram.len());
    assert!(SPRITES == 64, "SPRITES is {SPRITES}");

    assert!(
        ram[14 * 4..15 * 4] == [255, 112, 3, 254],
        "Sprite 14 is {:?}",
        &ram[14 * 4..15 * 4]
    );
    assert!(ram[0..4] == [255, 179, 0xC1, 20], "Sprite 0 is {:?}", &ram[0..4]);
    assert!(
        ram[7 * 4..8 * 4] == [255, 186, 0xC1, 62],
        "Sprite 7 is {:?}",
        &ram[7 * 4..8 * 4]
    );
    assert!(
        ram[8 * 4..9 * 4] == [255, 120, 2, 76],
        "Sprite 8 is {:?}",
        &ram[8 * 4..9 * 4]
    );
    assert!(
        ram[63 * 4..] == [255, 64, 0, 163],
        "Sprite 63 is {:?}",
        &ram[63 * 4..]
    );
    for (idx, entry) in ram.chunks(4).enumerate() {
        assert!(entry[0] == OFFSCREEN_Y, "Sprite {idx} on screen: {entry:?}");
    }

    let want = Sprite {
        y: 255,
        tile: 16,
        attributes: 0,
        x: 115,
    };
    assert!(sprite(15) == Some(want), "Sprite 15 is {:?}", sprite(15));
    assert!(sprite(64).is_none(), "Sprite 64 exists? {:?}", sprite(64));
}

#[test]
fn clouds() {
    let mut rng = StdRng::seed_from_u64(0);
    let out = nametables(Theme::default(), false, &mut rng);
    let block = NAMETABLE_SIZE + ATTRIBUTE_SIZE;
    assert!(out.len() == 2 * block, "Clouds length {}", out.len());

    for table in out.chunks(block) {
        assert!(
            table[..NAMETABLE_COLS].iter().all(|t| *t == 36),
            "Row 0 not blank: {:?}",
            &table[..NAMETABLE_COLS]
        );
        let row1 = &table[NAMETABLE_COLS..NAMETABLE_COLS + 8];
        assert!(
            row1 == [176, 178, 176, 178, 36, 36, 36, 36],
            "Row 1 starts {row1:?}"
        );
        let row2 = &table[2 * NAMETABLE_COLS..2 * NAMETABLE_COLS + 8];
        assert!(
            row2 == [177, 179, 177, 179, 36, 36, 36, 36],
            "Row 2 starts {row2:?}"
        );
        assert!(
            table[NAMETABLE_SIZE..].iter().all(|a| *a == 0),
            "Attributes not zero: {:?}",
            &table[NAMETABLE_SIZE..]
        );
    }
    assert!(
        out[..block] == out[block..],
        "Cloud nametables differ from each other"
    );
}

#[test]
fn alternate_themes() {
    for (theme, top, bottom, attr) in [
        (Theme::Goombas, 112, 114, 0x55),
        (Theme::CheepCheeps, 178, 180, 0xAA),
    ] {
        let mut rng = StdRng::seed_from_u64(0);
        let out = nametables(theme, false, &mut rng);
        assert!(
            out.len() == NAMETABLE_SIZE + ATTRIBUTE_SIZE,
            "{theme} length {}",
            out.len()
        );
        assert!(
            out[0..2] == [top, top + 1],
            "{theme} row 0 starts {:?}",
            &out[0..2]
        );
        assert!(
            out[NAMETABLE_COLS..NAMETABLE_COLS + 2] == [bottom, bottom + 1],
            "{theme} row 1 starts {:?}",
            &out[NAMETABLE_COLS..NAMETABLE_COLS + 2]
        );
        assert!(
            out[NAMETABLE_SIZE..].iter().all(|a| *a == attr),
            "{theme} attributes not {attr:#04X}"
        );
    }
}

#[test]
fn random_attributes() {
    let mut rng = StdRng::seed_from_u64(5);
    let out = nametables(Theme::Clouds, true, &mut rng);
    let attrs = &out[NAMETABLE_SIZE..NAMETABLE_SIZE + ATTRIBUTE_SIZE];
    for a in attrs {
        let top = a & 0x03;
        let bottom = (a >> 6) & 0x03;
        assert!(
            *a == attribute_byte(top, bottom),
            "Attribute {a:#04X} isn't a packed top/bottom pair"
        );
    }
    assert!(
        attrs.iter().any(|a| *a != attrs[0]),
        "Random attributes all {:#04X}",
        attrs[0]
    );
}

#[test]
fn theme_names() {
    for theme in Theme::iter() {
        let name = theme.to_string();
        let parsed = Theme::from_str(&name);
        assert!(parsed == Ok(theme), "{name} parsed to {parsed:?}");
        assert!(
            nametable(theme).len() == NAMETABLE_SIZE,
            "{theme} nametable size wrong"
        );
    }
    assert!(
        Theme::from_str("cheep-cheeps") == Ok(Theme::CheepCheeps),
        "kebab case name not accepted"
    );
    assert!(attribute_byte(3, 0) == 0x0F, "attribute_byte(3, 0) wrong");
    assert!(attribute_byte(0, 3) == 0xF0, "attribute_byte(0, 3) wrong");
}

//! BNROM / NINA-001 Mapper (Mapper 34).
//!
//! Both boards share mapper number 34 and a 32KB switchable PRG-ROM bank at
//! $8000-$FFFF. They differ in CHR handling: BNROM uses 8KB of CHR-RAM with
//! no banking, while NINA-001 has real CHR-ROM banked as two 4KB halves
//! selected by writes to $7FFE/$7FFF. The two are told apart here by
//! whether the cartridge carries CHR-ROM at all.
//!
//! Used by Deadly Towers, Impossible Mission II (BNROM) and the
//! `Deadly Towers`-class of color-chip gambling cartridges (NINA-001).
//!
//! Memory layout:
//! - PRG-ROM: 32KB switchable bank at $8000-$FFFF
//! - CHR-RAM: 8KB at PPU $0000-$1FFF (BNROM), or
//! - CHR-ROM: two 4KB banks at PPU $0000-$0FFF/$1000-$1FFF (NINA-001)
//!
//! Bank selection: Write to $8000-$FFFF (PRG), $7FFE/$7FFF (NINA-001 CHR)
//! - Bits 0-1: Select 32KB PRG bank

use crate::mapper::{Mapper, Mirroring};
use crate::rom::Rom;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// BNROM mapper implementation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bnrom {
    /// PRG-ROM data.
    prg_rom: Vec<u8>,
    /// CHR-ROM data (NINA-001 variant only).
    chr_rom: Vec<u8>,
    /// CHR-RAM data (8KB, BNROM variant only).
    chr_ram: Vec<u8>,
    /// True when the cartridge carries CHR-ROM (NINA-001) rather than CHR-RAM (BNROM).
    is_nina001: bool,
    /// Number of PRG-ROM banks (32KB each).
    prg_banks: usize,
    /// Currently selected PRG bank.
    prg_bank: u8,
    /// NINA-001 CHR bank selects, one per 4KB half.
    chr_banks: [u8; 2],
    /// Nametable mirroring mode.
    mirroring: Mirroring,
}

impl Bnrom {
    /// Create a new BNROM/NINA-001 mapper from ROM data.
    #[must_use]
    pub fn new(rom: &Rom) -> Self {
        let prg_banks = rom.prg_rom.len() / 32768;
        let is_nina001 = !rom.chr_rom.is_empty();

        Self {
            prg_rom: rom.prg_rom.clone(),
            chr_rom: rom.chr_rom.clone(),
            chr_ram: if is_nina001 { Vec::new() } else { vec![0u8; 8192] },
            is_nina001,
            prg_banks: prg_banks.max(1),
            prg_bank: 0,
            chr_banks: [0, 1],
            mirroring: rom.header.mirroring,
        }
    }

    fn chr_bank_count(&self) -> usize {
        (self.chr_rom.len() / 4096).max(1)
    }
}

impl Mapper for Bnrom {
    fn read_prg(&self, addr: u16) -> u8 {
        match addr {
            0x6000..=0x7FFF => {
                // No PRG-RAM on BNROM
                0
            }
            0x8000..=0xFFFF => {
                // 32KB switchable bank
                let bank = (self.prg_bank as usize) % self.prg_banks;
                let offset = (addr - 0x8000) as usize;
                self.prg_rom
                    .get(bank * 32768 + offset)
                    .copied()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    fn write_prg(&mut self, addr: u16, val: u8) {
        match addr {
            0x7FFE => self.chr_banks[0] = val,
            0x7FFF => self.chr_banks[1] = val,
            0x8000..=0xFFFF => {
                // Standard BNROM uses bits 0-1 for bank select
                // Some variants may use more bits
                self.prg_bank = val & 0x03;
            }
            _ => {}
        }
    }

    fn read_chr(&self, addr: u16) -> u8 {
        if self.is_nina001 {
            let half = usize::from(addr >> 12);
            let bank = usize::from(self.chr_banks[half.min(1)]) % self.chr_bank_count();
            let offset = bank * 4096 + (addr as usize & 0x0FFF);
            self.chr_rom.get(offset).copied().unwrap_or(0)
        } else {
            let offset = (addr & 0x1FFF) as usize;
            self.chr_ram.get(offset).copied().unwrap_or(0)
        }
    }

    fn write_chr(&mut self, addr: u16, val: u8) {
        if !self.is_nina001 {
            let offset = (addr & 0x1FFF) as usize;
            if let Some(byte) = self.chr_ram.get_mut(offset) {
                *byte = val;
            }
        }
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    fn mapper_number(&self) -> u16 {
        34
    }

    fn mapper_name(&self) -> &'static str {
        "BNROM"
    }

    fn reset(&mut self) {
        self.prg_bank = 0;
    }
}

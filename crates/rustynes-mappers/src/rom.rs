//! NES ROM file format parsing (iNES 1.0).
//!
//! This module handles loading and parsing NES ROM files in the legacy iNES
//! format. NES 2.0 headers are detected and rejected: the extended format's
//! larger mapper space, submappers, and precise RAM/NVRAM sizing are out of
//! scope here, and a header carrying the NES 2.0 identifier bits is far more
//! likely to need that extra precision than to tolerate being misread as
//! iNES 1.0.

use crate::Mirroring;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// Errors that can occur when parsing NES ROM files.
#[derive(Debug, thiserror::Error)]
pub enum RomError {
    /// ROM file is too small to contain a valid header.
    #[error("ROM file too small: expected at least 16 bytes, got {0}")]
    FileTooSmall(usize),

    /// Invalid iNES magic number in header.
    #[error("Invalid iNES magic number: expected [4E 45 53 1A], got {0:02X?}")]
    InvalidMagic([u8; 4]),

    /// Invalid PRG-ROM size.
    #[error("Invalid PRG-ROM size: {0}")]
    InvalidPrgSize(String),

    /// ROM file size doesn't match header specifications.
    #[error("ROM file size mismatch: expected {expected} bytes, got {actual} bytes")]
    SizeMismatch {
        /// Expected file size in bytes.
        expected: usize,
        /// Actual file size in bytes.
        actual: usize,
    },

    /// NES 2.0 headers are not supported.
    #[error("NES 2.0 headers are not supported")]
    Nes20NotSupported,

    /// Mapper number has no registered implementation.
    #[error("Unsupported mapper: {0}")]
    UnsupportedMapper(u16),
}

/// ROM header format. Only iNES 1.0 is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomFormat {
    /// Legacy iNES 1.0 header.
    INes,
}

/// Parsed iNES 1.0 ROM header.
///
/// # Format
///
/// ```text
/// Byte 0-3:  Magic "NES" + MS-DOS EOF (0x4E 0x45 0x53 0x1A)
/// Byte 4:    PRG-ROM size, 16 KB units
/// Byte 5:    CHR-ROM size, 8 KB units (0 = CHR-RAM)
/// Byte 6:    Flags 6 (mirroring, battery, trainer, four-screen, mapper low nibble)
/// Byte 7:    Flags 7 (VS Unisystem, PlayChoice-10, format ident, mapper high nibble)
/// Byte 8:    Flags 8 (PRG-RAM size, 8 KB units; 0 means 8 KB)
/// Byte 9:    Flags 9 (TV system: NTSC/PAL)
/// Byte 10-15: unused by this parser
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomHeader {
    /// Header format. Always `RomFormat::INes`; NES 2.0 is rejected at parse time.
    pub format: RomFormat,

    /// iNES mapper number (0-255).
    pub mapper: u16,

    /// PRG-ROM size, in 16 KB units.
    pub prg_rom_size: u16,

    /// CHR-ROM size, in 8 KB units (0 means the cartridge uses CHR-RAM).
    pub chr_rom_size: u16,

    /// PRG-RAM size in bytes.
    pub prg_ram_size: usize,

    /// CHR-RAM size in bytes (only meaningful when `chr_rom_size == 0`).
    pub chr_ram_size: usize,

    /// Nametable mirroring mode.
    pub mirroring: Mirroring,

    /// Battery-backed PRG-RAM present.
    pub has_battery: bool,

    /// 512-byte trainer present before PRG-ROM.
    pub has_trainer: bool,

    /// TV system byte from flags 9 (0 = NTSC, 1 = PAL).
    pub tv_system: u8,
}

impl RomHeader {
    /// iNES magic number: "NES" followed by MS-DOS EOF.
    const MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

    /// Parse ROM header from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is too short, the magic number doesn't
    /// match, the header identifies itself as NES 2.0, or PRG-ROM size is 0.
    pub fn parse(data: &[u8]) -> Result<Self, RomError> {
        if data.len() < 16 {
            return Err(RomError::FileTooSmall(data.len()));
        }

        let magic = [data[0], data[1], data[2], data[3]];
        if magic != Self::MAGIC {
            return Err(RomError::InvalidMagic(magic));
        }

        if (data[7] & 0x0C) == 0x08 {
            return Err(RomError::Nes20NotSupported);
        }

        let prg_rom_size = u16::from(data[4]);
        let chr_rom_size = u16::from(data[5]);

        if prg_rom_size == 0 {
            return Err(RomError::InvalidPrgSize(
                "PRG-ROM size cannot be 0".to_string(),
            ));
        }

        let mapper_low = (data[6] & 0xF0) >> 4;
        let mapper_high = data[7] & 0xF0;
        let mapper = u16::from(mapper_high | mapper_low);

        let four_screen = (data[6] & 0x08) != 0;
        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if (data[6] & 0x01) != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let has_battery = (data[6] & 0x02) != 0;
        let has_trainer = (data[6] & 0x04) != 0;

        let prg_ram_size = if data[8] == 0 {
            8192
        } else {
            usize::from(data[8]) * 8192
        };
        let chr_ram_size = if chr_rom_size == 0 { 8192 } else { 0 };
        let tv_system = data[9] & 0x01;

        Ok(Self {
            format: RomFormat::INes,
            mapper,
            prg_rom_size,
            chr_rom_size,
            prg_ram_size,
            chr_ram_size,
            mirroring,
            has_battery,
            has_trainer,
            tv_system,
        })
    }
}

/// Parsed NES ROM file: header plus the ROM/trainer bytes it describes.
#[derive(Debug, Clone)]
pub struct Rom {
    /// ROM header information.
    pub header: RomHeader,

    /// 512-byte trainer data (if present).
    pub trainer: Option<Vec<u8>>,

    /// PRG-ROM data (program code).
    pub prg_rom: Vec<u8>,

    /// CHR-ROM data (graphics), or empty if CHR-RAM.
    pub chr_rom: Vec<u8>,
}

impl Rom {
    /// Load a ROM from raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the header is invalid or the file is truncated
    /// relative to what the header declares.
    pub fn load(data: &[u8]) -> Result<Self, RomError> {
        let header = RomHeader::parse(data)?;

        let mut offset = 16;

        let trainer = if header.has_trainer {
            if data.len() < offset + 512 {
                return Err(RomError::FileTooSmall(data.len()));
            }
            let trainer_data = data[offset..offset + 512].to_vec();
            offset += 512;
            Some(trainer_data)
        } else {
            None
        };

        let prg_bytes = usize::from(header.prg_rom_size) * 16384;
        if data.len() < offset + prg_bytes {
            return Err(RomError::SizeMismatch {
                expected: offset + prg_bytes,
                actual: data.len(),
            });
        }
        let prg_rom = data[offset..offset + prg_bytes].to_vec();
        offset += prg_bytes;

        let chr_bytes = usize::from(header.chr_rom_size) * 8192;
        let chr_rom = if chr_bytes > 0 {
            if data.len() < offset + chr_bytes {
                return Err(RomError::SizeMismatch {
                    expected: offset + chr_bytes,
                    actual: data.len(),
                });
            }
            data[offset..offset + chr_bytes].to_vec()
        } else {
            Vec::new()
        };

        Ok(Self {
            header,
            trainer,
            prg_rom,
            chr_rom,
        })
    }
}

use super::controller::TransitionCause;
use super::{BankSelection, Cartridge, SegmentKind};
use crate::vcs::bus::address_space::AddressSpace;
use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaveStateError {
    #[error("State belongs to a {found} cartridge, expected {expected}")]
    SchemeMismatch { expected: String, found: String },

    #[error("State ended early")]
    Truncated,

    #[error("{0} unexpected bytes after the state")]
    TrailingBytes(usize),

    #[error("State holds {found} segments, cartridge has {expected}")]
    SegmentCount { expected: usize, found: usize },

    #[error("Slice {slice} invalid for segment {segment} ({bank_count} banks)")]
    InvalidSlice {
        segment: usize,
        slice: u16,
        bank_count: u16,
    },

    #[error("State holds {found} bytes of RAM, cartridge has {expected}")]
    RamSize { expected: usize, found: usize },

    #[error("Scheme name is not valid UTF-8")]
    InvalidName,
}

/// Everything needed to rebuild a cartridge's mapping.
///
/// The page table itself is never stored; restoring a record re-derives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRecord {
    pub scheme: String,
    pub selection: BankSelection,
    pub ram: Vec<u8>,
}

impl SaveRecord {
    /*
       Little endian layout:
         u32          scheme name length
         [u8]         scheme name
         u16 * n      one slice per segment, fixed segments included
         [u8]         RAM, exactly as long as the cartridge's
    */
    pub fn encode(&self) -> Vec<u8> {
        let name = self.scheme.as_bytes();
        let mut out = Vec::with_capacity(4 + name.len() + 2 * self.selection.len() + self.ram.len());

        out.extend_from_slice(&(name.len() as u32).to_le_bytes());
        out.extend_from_slice(name);
        for slice in self.selection.slices() {
            out.extend_from_slice(&slice.to_le_bytes());
        }
        out.extend_from_slice(&self.ram);
        out
    }

    /// Decode a state for `cart`.
    ///
    /// The scheme name is checked before anything else is read, since the
    /// length of the remaining fields depends on it.
    pub fn decode(bytes: &[u8], cart: &dyn Cartridge) -> Result<SaveRecord, SaveStateError> {
        let mut reader = Reader::new(bytes);

        let name_len = reader.u32()? as usize;
        let name = std::str::from_utf8(reader.take(name_len)?)
            .map_err(|_| SaveStateError::InvalidName)?;
        check_scheme(cart, name)?;

        let segments = cart.segments().len();
        let mut slices = Vec::with_capacity(segments);
        for _ in 0..segments {
            slices.push(reader.u16()?);
        }
        let ram = reader.take(cart.ram().len())?.to_vec();

        if reader.remaining() > 0 {
            return Err(SaveStateError::TrailingBytes(reader.remaining()));
        }

        Ok(SaveRecord {
            scheme: name.to_string(),
            selection: BankSelection(slices),
            ram,
        })
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], SaveStateError> {
        let end = self.pos.checked_add(len).ok_or(SaveStateError::Truncated)?;
        let chunk = self
            .bytes
            .get(self.pos..end)
            .ok_or(SaveStateError::Truncated)?;
        self.pos = end;
        Ok(chunk)
    }

    fn u16(&mut self) -> Result<u16, SaveStateError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32, SaveStateError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

fn check_scheme(cart: &dyn Cartridge, found: &str) -> Result<(), SaveStateError> {
    if found != cart.name() {
        warn!("Rejected {} state for {} cartridge", found, cart.name());
        return Err(SaveStateError::SchemeMismatch {
            expected: cart.name().to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

pub fn save(cart: &dyn Cartridge) -> SaveRecord {
    SaveRecord {
        scheme: cart.name().to_string(),
        selection: cart.selection(),
        ram: cart.ram().to_vec(),
    }
}

/// Restore `record` into `cart` and rebuild its pages.
///
/// Every field is validated before the cartridge is touched, so a failed
/// load leaves it exactly as it was. The bank lock is lifted while the
/// mapping is rebuilt and put back afterwards.
pub fn load(
    cart: &mut dyn Cartridge,
    space: &mut AddressSpace,
    record: &SaveRecord,
) -> Result<(), SaveStateError> {
    check_scheme(cart, &record.scheme)?;

    let segments = cart.segments();
    if record.selection.len() != segments.len() {
        return Err(SaveStateError::SegmentCount {
            expected: segments.len(),
            found: record.selection.len(),
        });
    }

    let current = cart.selection();
    for (segment, (info, slice)) in segments.iter().zip(record.selection.slices()).enumerate() {
        let fixed_mismatch = info.kind == SegmentKind::Fixed && current.get(segment) != Some(*slice);
        if *slice >= info.bank_count || fixed_mismatch {
            return Err(SaveStateError::InvalidSlice {
                segment,
                slice: *slice,
                bank_count: info.bank_count,
            });
        }
    }

    if record.ram.len() != cart.ram().len() {
        return Err(SaveStateError::RamSize {
            expected: cart.ram().len(),
            found: record.ram.len(),
        });
    }

    // Validated; from here on nothing can fail
    let was_locked = cart.base_mut().controller.lift_lock();
    cart.base_mut().ram_mut().copy_from_slice(&record.ram);
    for (segment, info) in segments.iter().enumerate() {
        if info.kind != SegmentKind::Fixed {
            let slice = record.selection.slices()[segment];
            cart.select_slice(segment, slice, TransitionCause::Restore, space);
        }
    }
    cart.base_mut().controller.restore_lock(was_locked);
    cart.base_mut().controller.mark_changed();

    info!("Restored {} state: banks {:?}", record.scheme, record.selection.slices());
    Ok(())
}

/// Decode and restore an encoded state in one step
pub fn load_bytes(
    cart: &mut dyn Cartridge,
    space: &mut AddressSpace,
    bytes: &[u8],
) -> Result<(), SaveStateError> {
    let record = SaveRecord::decode(bytes, cart)?;
    load(cart, space, &record)
}

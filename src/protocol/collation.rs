use crate::Error;
use encoding_rs::Encoding;

/// The collation of a character column or parameter as carried in
/// TYPE_INFO: a four-byte info field (LCID plus comparison flags) and a
/// one-byte sort id. [2.2.5.1.2]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collation {
    info: u32,
    sort_id: u8,
}

impl Collation {
    pub fn new(info: u32, sort_id: u8) -> Self {
        Self { info, sort_id }
    }

    /// The raw info field. The lower 20 bits carry the LCID.
    pub fn info(&self) -> u32 {
        self.info
    }

    pub fn sort_id(&self) -> u8 {
        self.sort_id
    }

    /// The locale id part of the info field.
    pub fn lcid(&self) -> u32 {
        self.info & 0xf_ffff
    }

    /// Resolve the byte encoder this collation implies.
    ///
    /// A non-zero sort id names a SQL Server sort order and takes
    /// precedence; otherwise the LCID decides. Only the single-byte code
    /// pages and the common East Asian ones are mapped.
    pub fn encoding(&self) -> crate::Result<&'static Encoding> {
        match self.sort_id {
            0 => match self.lcid() {
                0x0401 | 0x0801 | 0x0c01 => Ok(encoding_rs::WINDOWS_1256),
                0x0402 | 0x0419 | 0x0422 | 0x0423 => Ok(encoding_rs::WINDOWS_1251),
                0x0404 | 0x0c04 | 0x1404 => Ok(encoding_rs::BIG5),
                0x0405 | 0x040e | 0x0415 | 0x0418 | 0x041a | 0x041b | 0x0424 => {
                    Ok(encoding_rs::WINDOWS_1250)
                }
                0x0407 | 0x0409 | 0x040b | 0x040c | 0x0410 | 0x0413 | 0x0414 | 0x0416 | 0x041d
                | 0x0809 | 0x080a | 0x0816 | 0x0c09 | 0x0c0a | 0x1009 | 0x1409 => {
                    Ok(encoding_rs::WINDOWS_1252)
                }
                0x0408 => Ok(encoding_rs::WINDOWS_1253),
                0x040d => Ok(encoding_rs::WINDOWS_1255),
                0x0411 => Ok(encoding_rs::SHIFT_JIS),
                0x0412 => Ok(encoding_rs::EUC_KR),
                0x041e => Ok(encoding_rs::WINDOWS_874),
                0x041f => Ok(encoding_rs::WINDOWS_1254),
                0x0425 | 0x0426 | 0x0427 => Ok(encoding_rs::WINDOWS_1257),
                0x042a => Ok(encoding_rs::WINDOWS_1258),
                0x0804 | 0x1004 => Ok(encoding_rs::GBK),
                lcid => Err(Error::Encoding(
                    format!("unsupported collation lcid {:#x}", lcid).into(),
                )),
            },
            // Latin1_General and SQL_Latin1_General sort orders.
            51..=60 | 183..=186 => Ok(encoding_rs::WINDOWS_1252),
            // Cyrillic_General sort orders.
            104..=108 => Ok(encoding_rs::WINDOWS_1251),
            sort_id => Err(Error::Encoding(
                format!("unsupported sort id {}", sort_id).into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collation_accessors() {
        let collation = Collation::new(13632521, 52);
        assert_eq!(13632521, collation.info());
        assert_eq!(52, collation.sort_id());
    }

    #[test]
    fn lcid_masks_comparison_flags() {
        let collation = Collation::new(0x0090_0409, 0);
        assert_eq!(0x0409, collation.lcid());
    }

    #[test]
    fn sort_id_takes_precedence() {
        let collation = Collation::new(0, 52);
        assert_eq!(encoding_rs::WINDOWS_1252, collation.encoding().unwrap());
    }

    #[test]
    fn lcid_english_is_windows_1252() {
        let collation = Collation::new(0x0409, 0);
        assert_eq!(encoding_rs::WINDOWS_1252, collation.encoding().unwrap());
    }

    #[test]
    fn lcid_russian_is_windows_1251() {
        let collation = Collation::new(0x0419, 0);
        assert_eq!(encoding_rs::WINDOWS_1251, collation.encoding().unwrap());
    }

    #[test]
    fn lcid_japanese_is_shift_jis() {
        let collation = Collation::new(0x0411, 0);
        assert_eq!(encoding_rs::SHIFT_JIS, collation.encoding().unwrap());
    }

    #[test]
    fn unknown_lcid_is_rejected() {
        let collation = Collation::new(0xf_f0f0, 0);
        assert!(matches!(collation.encoding(), Err(Error::Encoding(_))));
    }

    #[test]
    fn unknown_sort_id_is_rejected() {
        let collation = Collation::new(0x0409, 250);
        assert!(matches!(collation.encoding(), Err(Error::Encoding(_))));
    }
}

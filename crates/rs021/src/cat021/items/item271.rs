use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## Surface Capabilities and Characteristics (I021/271)
 *
 * Primary octet: | spare (2) | POA | CDTI/S | B2low | RAS | IDENT | FX |.
 * First extension: | L+W (4) | spare (3) | FX |.
 *
 * With FX = 0 the item occupies exactly one octet; with FX = 1, two.
 */
#[derive(Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct SurfaceCapabilities {
    #[deku(bits = "2")]
    #[serde(skip)]
    pub spare: u8,
    /// Position transmitted is ADS-B position reference point
    #[deku(bits = "1")]
    pub poa: bool,
    /// CDTI operational on the surface
    #[deku(bits = "1")]
    pub cdti_s: bool,
    /// Class B2 transmit power less than 70 W
    #[deku(bits = "1")]
    pub b2_low: bool,
    /// Receiving ATC services
    #[deku(bits = "1")]
    pub ras: bool,
    /// IDENT switch active
    #[deku(bits = "1")]
    pub ident: bool,
    #[deku(bits = "1", update = "self.ext1.is_some() as u8")]
    #[serde(skip)]
    pub fx: u8,
    #[deku(cond = "*fx == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext1: Option<SurfaceCapabilitiesExt1>,
}

#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct SurfaceCapabilitiesExt1 {
    /// Length plus width code of the aircraft
    #[deku(bits = "4")]
    pub l_w: u8,
    #[deku(bits = "3")]
    #[serde(skip)]
    pub spare: u8,
    #[deku(bits = "1", update = "0")]
    #[serde(skip)]
    pub fx: u8,
}

impl SurfaceCapabilities {
    /// Refreshes the FX bits after changing extension presence.
    pub fn update(&mut self) -> Result<(), DekuError> {
        if let Some(ext1) = self.ext1.as_mut() {
            DekuUpdate::update(ext1)?;
        }
        DekuUpdate::update(self)
    }
}

impl fmt::Display for SurfaceCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  Surface:      ")?;
        if self.poa {
            write!(f, " POA")?;
        }
        if self.cdti_s {
            write!(f, " CDTI/S")?;
        }
        if self.b2_low {
            write!(f, " B2low")?;
        }
        if self.ras {
            write!(f, " RAS")?;
        }
        if self.ident {
            write!(f, " IDENT")?;
        }
        if let Some(ext1) = &self.ext1 {
            write!(f, " L+W={}", ext1.l_w)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlit::hex;

    #[test]
    fn test_primary_only() {
        // CDTI/S + IDENT, FX=0: exactly one octet
        let bytes = hex!("12ff");
        let (rest, item) =
            SurfaceCapabilities::from_bytes((&bytes, 0)).unwrap();
        assert_eq!(rest.0.len(), 1);
        assert!(item.cdti_s);
        assert!(item.ident);
        assert_eq!(item.ext1, None);
        assert_eq!(item.to_bytes().unwrap(), vec![0x12]);
    }

    #[test]
    fn test_with_extension() {
        // FX=1, L+W=9: exactly two octets
        let bytes = hex!("0190");
        let (rest, item) =
            SurfaceCapabilities::from_bytes((&bytes, 0)).unwrap();
        assert!(rest.0.is_empty());
        assert_eq!(item.ext1.unwrap().l_w, 9);
        assert_eq!(item.to_bytes().unwrap(), bytes.to_vec());
    }

    #[test]
    fn test_update() {
        let mut item = SurfaceCapabilities {
            ras: true,
            ext1: Some(SurfaceCapabilitiesExt1 {
                l_w: 3,
                ..Default::default()
            }),
            ..Default::default()
        };
        item.update().unwrap();
        assert_eq!(item.fx, 1);
        assert_eq!(item.to_bytes().unwrap(), hex!("0530").to_vec());
    }
}

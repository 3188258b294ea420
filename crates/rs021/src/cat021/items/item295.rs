use deku::prelude::*;
use serde::Serialize;
use std::fmt;

/**
 * ## Data Ages (I021/295)
 *
 * Compound item: up to four FX-chained presence octets announcing which
 * of 23 one-octet ages follow, in presence-bit order. Each age counts
 * from the Time of Applicability in steps of 0.1 s.
 */
#[derive(Debug, Default, PartialEq, Serialize, DekuRead, DekuWrite, Clone)]
pub struct DataAges {
    #[serde(skip)]
    pub oct1: AgePresence1,
    #[deku(cond = "oct1.fx == 1")]
    #[serde(skip)]
    pub oct2: Option<AgePresence2>,
    #[deku(cond = "oct2.as_ref().map_or(0, |o| o.fx) == 1")]
    #[serde(skip)]
    pub oct3: Option<AgePresence3>,
    #[deku(cond = "oct3.as_ref().map_or(0, |o| o.fx) == 1")]
    #[serde(skip)]
    pub oct4: Option<AgePresence4>,

    /// Aircraft operational status age
    #[deku(cond = "oct1.aos == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aos: Option<u8>,
    /// Target report descriptor age
    #[deku(cond = "oct1.trd == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trd: Option<u8>,
    /// Mode 3/A code age
    #[deku(cond = "oct1.m3a == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m3a: Option<u8>,
    /// Quality indicators age
    #[deku(cond = "oct1.qi == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qi: Option<u8>,
    /// Trajectory intent age
    #[deku(cond = "oct1.ti == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ti: Option<u8>,
    /// Message amplitude age
    #[deku(cond = "oct1.mam == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mam: Option<u8>,
    /// Geometric height age
    #[deku(cond = "oct1.gh == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gh: Option<u8>,

    /// Flight level age
    #[deku(cond = "oct2.as_ref().map_or(0, |o| o.fl) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fl: Option<u8>,
    /// Intermediate state selected altitude age
    #[deku(cond = "oct2.as_ref().map_or(0, |o| o.isa) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isa: Option<u8>,
    /// Final state selected altitude age
    #[deku(cond = "oct2.as_ref().map_or(0, |o| o.fsa) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fsa: Option<u8>,
    /// Air speed age
    #[deku(cond = "oct2.as_ref().map_or(0, |o| o.asp) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asp: Option<u8>,
    /// True air speed age
    #[deku(cond = "oct2.as_ref().map_or(0, |o| o.tas) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tas: Option<u8>,
    /// Magnetic heading age
    #[deku(cond = "oct2.as_ref().map_or(0, |o| o.mh) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mh: Option<u8>,
    /// Barometric vertical rate age
    #[deku(cond = "oct2.as_ref().map_or(0, |o| o.bvr) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bvr: Option<u8>,

    /// Geometric vertical rate age
    #[deku(cond = "oct3.as_ref().map_or(0, |o| o.gvr) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gvr: Option<u8>,
    /// Ground vector age
    #[deku(cond = "oct3.as_ref().map_or(0, |o| o.gv) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gv: Option<u8>,
    /// Track angle rate age
    #[deku(cond = "oct3.as_ref().map_or(0, |o| o.tar) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tar: Option<u8>,
    /// Target identification age
    #[deku(cond = "oct3.as_ref().map_or(0, |o| o.tid) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<u8>,
    /// Target status age
    #[deku(cond = "oct3.as_ref().map_or(0, |o| o.ts) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<u8>,
    /// Met information age
    #[deku(cond = "oct3.as_ref().map_or(0, |o| o.met) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub met: Option<u8>,
    /// Roll angle age
    #[deku(cond = "oct3.as_ref().map_or(0, |o| o.roa) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roa: Option<u8>,

    /// ACAS resolution advisory age
    #[deku(cond = "oct4.as_ref().map_or(0, |o| o.ara) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ara: Option<u8>,
    /// Surface capabilities age
    #[deku(cond = "oct4.as_ref().map_or(0, |o| o.scc) == 1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scc: Option<u8>,
}

#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct AgePresence1 {
    #[deku(bits = "1")]
    pub aos: u8,
    #[deku(bits = "1")]
    pub trd: u8,
    #[deku(bits = "1")]
    pub m3a: u8,
    #[deku(bits = "1")]
    pub qi: u8,
    #[deku(bits = "1")]
    pub ti: u8,
    #[deku(bits = "1")]
    pub mam: u8,
    #[deku(bits = "1")]
    pub gh: u8,
    #[deku(bits = "1")]
    pub fx: u8,
}

#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct AgePresence2 {
    #[deku(bits = "1")]
    pub fl: u8,
    #[deku(bits = "1")]
    pub isa: u8,
    #[deku(bits = "1")]
    pub fsa: u8,
    #[deku(bits = "1")]
    pub asp: u8,
    #[deku(bits = "1")]
    pub tas: u8,
    #[deku(bits = "1")]
    pub mh: u8,
    #[deku(bits = "1")]
    pub bvr: u8,
    #[deku(bits = "1")]
    pub fx: u8,
}

#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct AgePresence3 {
    #[deku(bits = "1")]
    pub gvr: u8,
    #[deku(bits = "1")]
    pub gv: u8,
    #[deku(bits = "1")]
    pub tar: u8,
    #[deku(bits = "1")]
    pub tid: u8,
    #[deku(bits = "1")]
    pub ts: u8,
    #[deku(bits = "1")]
    pub met: u8,
    #[deku(bits = "1")]
    pub roa: u8,
    #[deku(bits = "1")]
    pub fx: u8,
}

#[derive(
    Debug, Default, PartialEq, Eq, Serialize, DekuRead, DekuWrite, Copy, Clone,
)]
pub struct AgePresence4 {
    #[deku(bits = "1")]
    pub ara: u8,
    #[deku(bits = "1")]
    pub scc: u8,
    #[deku(bits = "5")]
    pub spare: u8,
    #[deku(bits = "1")]
    pub fx: u8,
}

impl DataAges {
    const LSB: f64 = 0.1; // s

    pub fn seconds(raw: u8) -> f64 {
        raw as f64 * Self::LSB
    }

    /// Rebuilds the presence chain from the populated ages. Trailing
    /// presence octets with no bit set are dropped.
    pub fn update(&mut self) -> Result<(), DekuError> {
        let p = |o: &Option<u8>| o.is_some() as u8;

        let oct4 = AgePresence4 {
            ara: p(&self.ara),
            scc: p(&self.scc),
            spare: 0,
            fx: 0,
        };
        let need4 = (oct4.ara | oct4.scc) == 1;

        let mut oct3 = AgePresence3 {
            gvr: p(&self.gvr),
            gv: p(&self.gv),
            tar: p(&self.tar),
            tid: p(&self.tid),
            ts: p(&self.ts),
            met: p(&self.met),
            roa: p(&self.roa),
            fx: 0,
        };
        let need3 = need4
            || (oct3.gvr
                | oct3.gv
                | oct3.tar
                | oct3.tid
                | oct3.ts
                | oct3.met
                | oct3.roa)
                == 1;
        oct3.fx = need4 as u8;

        let mut oct2 = AgePresence2 {
            fl: p(&self.fl),
            isa: p(&self.isa),
            fsa: p(&self.fsa),
            asp: p(&self.asp),
            tas: p(&self.tas),
            mh: p(&self.mh),
            bvr: p(&self.bvr),
            fx: 0,
        };
        let need2 = need3
            || (oct2.fl
                | oct2.isa
                | oct2.fsa
                | oct2.asp
                | oct2.tas
                | oct2.mh
                | oct2.bvr)
                == 1;
        oct2.fx = need3 as u8;

        self.oct1 = AgePresence1 {
            aos: p(&self.aos),
            trd: p(&self.trd),
            m3a: p(&self.m3a),
            qi: p(&self.qi),
            ti: p(&self.ti),
            mam: p(&self.mam),
            gh: p(&self.gh),
            fx: need2 as u8,
        };
        self.oct2 = need2.then_some(oct2);
        self.oct3 = need3.then_some(oct3);
        self.oct4 = need4.then_some(oct4);
        Ok(())
    }
}

impl fmt::Display for DataAges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  Data ages:    ")?;
        let named: [(&str, &Option<u8>); 23] = [
            ("AOS", &self.aos),
            ("TRD", &self.trd),
            ("M3A", &self.m3a),
            ("QI", &self.qi),
            ("TI", &self.ti),
            ("MAM", &self.mam),
            ("GH", &self.gh),
            ("FL", &self.fl),
            ("ISA", &self.isa),
            ("FSA", &self.fsa),
            ("AS", &self.asp),
            ("TAS", &self.tas),
            ("MH", &self.mh),
            ("BVR", &self.bvr),
            ("GVR", &self.gvr),
            ("GV", &self.gv),
            ("TAR", &self.tar),
            ("TID", &self.tid),
            ("TS", &self.ts),
            ("MET", &self.met),
            ("ROA", &self.roa),
            ("ARA", &self.ara),
            ("SCC", &self.scc),
        ];
        for (name, age) in named {
            if let Some(raw) = age {
                write!(f, " {}={:.1}s", name, Self::seconds(*raw))?;
            }
        }
        writeln!(f)
    }
}

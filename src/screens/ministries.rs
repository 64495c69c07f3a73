// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ministry directory. Each entry links out to the ministry's own site.

use crate::models::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ministry {
    pub id: &'static str,
    pub name: &'static str,
    pub name_ku: &'static str,
    pub name_ckb: &'static str,
    pub url: &'static str,
}

impl Ministry {
    /// Kurmanji and Sorani have their own names; every other language
    /// shows the English one.
    pub fn name_for(&self, language: Language) -> &'static str {
        match language {
            Language::Kurmanji => self.name_ku,
            Language::Sorani => self.name_ckb,
            _ => self.name,
        }
    }
}

pub fn ministry(id: &str) -> Option<&'static Ministry> {
    MINISTRIES.iter().find(|m| m.id == id)
}

pub static MINISTRIES: [Ministry; 12] = [
    Ministry {
        id: "prime_ministry",
        name: "Prime Ministry",
        name_ku: "Serokwezîrî",
        name_ckb: "سەرۆک وەزیران",
        url: "https://serokweziri.pezkuwichain.io",
    },
    Ministry {
        id: "foreign_affairs",
        name: "Foreign Affairs",
        name_ku: "Derve",
        name_ckb: "دەرەوە",
        url: "https://derve.pezkuwichain.io",
    },
    Ministry {
        id: "education",
        name: "Education",
        name_ku: "Perwerde",
        name_ckb: "پەروەردە",
        url: "https://perwerde.pezkuwichain.io",
    },
    Ministry {
        id: "health",
        name: "Health",
        name_ku: "Tenduristî",
        name_ckb: "تەندروستی",
        url: "https://tenduristi.pezkuwichain.io",
    },
    Ministry {
        id: "interior",
        name: "Interior",
        name_ku: "Navxwe",
        name_ckb: "ناوخۆ",
        url: "https://navxwe.pezkuwichain.io",
    },
    Ministry {
        id: "justice",
        name: "Justice",
        name_ku: "Dadwerî",
        name_ckb: "دادوەری",
        url: "https://dadweri.pezkuwichain.io",
    },
    Ministry {
        id: "finance",
        name: "Finance",
        name_ku: "Darayî",
        name_ckb: "دارایی",
        url: "https://darayi.pezkuwichain.io",
    },
    Ministry {
        id: "defense",
        name: "Defense",
        name_ku: "Bergiranî",
        name_ckb: "بەرگری",
        url: "https://bergirani.pezkuwichain.io",
    },
    Ministry {
        id: "agriculture",
        name: "Agriculture",
        name_ku: "Çandinî",
        name_ckb: "کشتوکاڵ",
        url: "https://candini.pezkuwichain.io",
    },
    Ministry {
        id: "energy",
        name: "Energy",
        name_ku: "Werzî",
        name_ckb: "وزە",
        url: "https://werzi.pezkuwichain.io",
    },
    Ministry {
        id: "transport",
        name: "Transport",
        name_ku: "Veguhestin",
        name_ckb: "گواستنەوە",
        url: "https://veguhestin.pezkuwichain.io",
    },
    Ministry {
        id: "culture",
        name: "Culture & Tourism",
        name_ku: "Çand û Gerî",
        name_ckb: "کولتور و گەشتیاری",
        url: "https://cand.pezkuwichain.io",
    },
];

//! Literal content bundled into the page: scenario trajectories, the
//! index-linked expenditure table and the explanatory accordion sections.

use crate::core::Scenario;
use crate::error::PageResult;
use crate::table::{ColumnKind, ColumnSpec, TableSchema};

/// Name of the column holding budget item codes (`28.89.31`).
pub const IDENTIFIER_COLUMN: &str = "Momentti";

pub const INDEX_TABLE_HEADERS: [&str; 4] = ["Momentti", "Indeksiryhmä", "Kuvaus", "Lähtöarvo 2025"];

/// Projected expenditure in billions of euros, one point per year 2025..=2035.
pub const SCENARIO_POINTS: [(&str, [f64; 11]); 4] = [
    (
        "Skenaario 1: Perusvaihtoehto",
        [62.0, 63.5, 65.2, 66.9, 68.5, 69.8, 70.9, 71.8, 72.5, 73.1, 73.78],
    ),
    (
        "Skenaario 2: Jäädytysten jatkaminen",
        [62.0, 63.3, 64.7, 66.1, 67.4, 68.6, 69.7, 70.6, 71.4, 72.1, 72.71],
    ),
    (
        "Skenaario 3: Ehdollinen indeksileikkaus",
        [62.0, 63.0, 64.1, 65.2, 66.3, 67.3, 68.2, 68.9, 69.5, 69.7, 69.88],
    ),
    (
        "Skenaario 4: Kokonaisvaltainen indeksileikkaus",
        [62.0, 62.8, 63.7, 64.6, 65.5, 66.3, 67.0, 67.6, 68.0, 68.2, 68.32],
    ),
];

/// Index-linked budget items with their 2025 baseline in euros.
pub const INDEX_TABLE_ROWS: [[&str; 4]; 44] = [
    [
        "28.89.31",
        "Hyvinvointialueiden hintaindeksi",
        "Hyvinvointialueiden ja HUS-yhtymän sosiaali- ja terveydenhuollon sekä pelastustoimen rahoitus",
        "26 235 003 000",
    ],
    [
        "28.50.15",
        "Työeläkeindeksi (TyEL)",
        "Eläkkeet",
        "5 622 854 000",
    ],
    [
        "33.40.60",
        "Kansaneläkeindeksi (KEL)",
        "Valtion osuus kansaneläkelaisesta ja eräistä muista laeista johtuvista menoista",
        "4 065 100 000",
    ],
    [
        "28.90.30",
        "Valtionosuusindeksi (VOS)",
        "Valtionosuus kunnille peruspalvelujen järjestämiseen",
        "3 366 600 000",
    ],
    [
        "27.10.01",
        "Kuluttajahintaindeksi (KHI)",
        "Puolustusvoimien toimintamenot",
        "2 519 809 000",
    ],
    [
        "29.40.50",
        "Yliopistoindeksi",
        "Valtionrahoitus yliopistojen toimintaan",
        "2 269 102 000",
    ],
    [
        "33.30.60",
        "Kansaneläkeindeksi (KEL)",
        "Valtion osuus sairausvakuutuslaista johtuvista menoista",
        "1 866 300 000",
    ],
    [
        "33.10.50",
        "Kuluttajahintaindeksi (KHI)",
        "Perhe-etuudet",
        "1 626 400 000",
    ],
    [
        "27.10.19",
        "Toteutuneen kustannustason nousun mukaan",
        "Monitoimihävittäjien hankinta",
        "1 852 774 000",
    ],
    [
        "27.10.18",
        "Teollisuuden tuottahindeksi, alaindeksin C28 (Muiden koneiden ja laitteiden valmistus)",
        "Puolustusmateriaalihankinnat",
        "1 517 054 000",
    ],
    [
        "33.20.52",
        "Kansaneläkeindeksi (KEL)",
        "Valtionosuus työttömyysetuuksien perusturvasta",
        "1 312 500 000",
    ],
    [
        "33.10.54",
        "Kansaneläkeindeksi (KEL)",
        "Asumistuki",
        "1 406 300 000",
    ],
    [
        "33.10.57",
        "Kansaneläkeindeksi (KEL)",
        "Perustoimeentulotuki",
        "970 200 000",
    ],
    [
        "29.40.55",
        "Yliopistoindeksi",
        "Valtionrahoitus ammattikorkeakoulujen toimintaan",
        "1 020 666 000",
    ],
    [
        "29.20.30",
        "Ammatillisen koulutuksen indeksi",
        "Valtionosuus ja -avustus ammatilliseen koulutukseen",
        "1 020 058 000",
    ],
    [
        "29.70.55",
        "Kansaneläkeindeksi (KEL)",
        "Opintoraha ja asumislisä",
        "699 300 000",
    ],
    [
        "33.40.51",
        "Työeläkeindeksi (TyEL)*",
        "Valtion osuus maatalousyrittäjän eläkelaisesta johtuvista menoista",
        "850 000 000",
    ],
    [
        "29.10.30",
        "Valtionosuusindeksi (VOS)",
        "Valtionosuus ja -avustus esi- ja perusopetuksen ja varhaiskasvatuksen käyttökustannuksiin",
        "625 697 000",
    ],
    [
        "33.20.50",
        "Kansaneläkeindeksi (KEL)",
        "Valtionosuus työttömyysetuuksien ansioturvasta ja vuorottelukorvauksesta",
        "539 800 000",
    ],
    [
        "31.20.60",
        "YLE-indeksi",
        "Siirto valtion televisio- ja radiorahastoon",
        "609 681 000",
    ],
    [
        "33.40.52",
        "Työeläkeindeksi (TyEL)*",
        "Valtion osuus yrittäjän eläkelaisesta johtuvista menoista",
        "521 800 000",
    ],
    [
        "28.50.63",
        "Työeläkeindeksi (TyEL)",
        "Muiden eläkelaitosten vastattavaksi kuuluvat eläkemenot",
        "375 086 000",
    ],
    [
        "29.20.35",
        "Valtionosuusindeksi (VOS)",
        "Valtionosuus ja -avustus lukiokoulutuksen käyttökustannuksiin",
        "333 411 000",
    ],
    [
        "29.10.31",
        "Valtionosuusindeksi (VOS)",
        "Valtionosuus ja -avustus vapaan sivistystyön oppilaitosten käyttökustannuksiin",
        "185 445 000",
    ],
    [
        "29.80.31",
        "Valtionosuusindeksi (VOS)",
        "Valtionosuus ja -avustus esittävän taiteen ja museoiden käyttökustannuksiin",
        "147 118 000",
    ],
    [
        "29.80.34",
        "Valtionosuusindeksi (VOS)",
        "Valtionosuus ja -avustus taiteen perusopetuksen käyttökustannuksiin",
        "99 609 000",
    ],
    [
        "29.01.52",
        "Kuluttajahintaindeksi (KHI)",
        "Valtion rahoitus evankelis-luterilaisen kirkon yhteiskunnallisiin tehtäviin",
        "105 030 000",
    ],
    [
        "29.80.56",
        "ATI 2/3 ja KHI 1/3 painolla",
        "Valtionrahoitus kansallisten taidelaitosten toimintaan",
        "66 764 000",
    ],
    [
        "33.40.50",
        "Työeläkeindeksi (TyEL)",
        "Valtion osuus merimieseläkekassan menoista",
        "68 000 000",
    ],
    [
        "27.30.20",
        "Kuluttajahintaindeksi (KHI)",
        "Sotilaallisen kriisinhallinnan kalusto- ja hallintomenot",
        "64 920 000",
    ],
    [
        "29.90.52 (29.90.30)",
        "Valtionosuusindeksi (VOS)",
        "Valtionosuudet kunnille ja liikunnan koulutuskeskuksille",
        "36 631 000",
    ],
    [
        "33.50.52",
        "Työeläkeindeksi (TyEL)*",
        "Sotilasvammakorvaukset",
        "42 000 000",
    ],
    [
        "33.40.53",
        "Työeläkeindeksi (TyEL)",
        "Valtion korvaus lapsen hoidon ja opiskelun ajalta kertyvästä eläkeestä",
        "27 600 000",
    ],
    [
        "33.10.53",
        "Kansaneläkeindeksi (KEL)",
        "Sotilasavustus",
        "23 000 000",
    ],
    [
        "29.80.16",
        "Työeläkeindeksi (TyEL)",
        "Ylimääräiset taiteilija- ja sanomalehtimieseläkkeet",
        "22 932 000",
    ],
    [
        "28.50.95",
        "Työeläkeindeksi (TyEL)",
        "Muiden eläkelaitosten valtion puolesta maksamien eläkemenojen ja valtiolle maksamien ennakoiden korkomenot",
        "34 961 000",
    ],
    [
        "26.40.63",
        "Kansaneläkeindeksi (KEL)",
        "Vastaanottotoiminnan asiakkaille maksettavat tuet",
        "45 890 000",
    ],
    [
        "33.40.54",
        "Työeläkeindeksi (TyEL)",
        "Valtion osuus maatalousyrittäjien tapaturmavakuutuksen kustannuksista",
        "14 000 000",
    ],
    [
        "30.10.42",
        "TyEL/KEL",
        "Luopumistuet ja -eläkkeet",
        "13 200 000",
    ],
    [
        "29.80.30",
        "Valtionosuusindeksi (VOS)",
        "Valtionavustukset yleisten kirjastojen toimintaan",
        "9 228 000",
    ],
    [
        "29.01.51",
        "Kuluttajahintaindeksi (KHI)",
        "Avustukset kirkolliseen ja uskonnolliseen toimintaan",
        "3 152 000",
    ],
    [
        "28.50.16",
        "Työeläkeindeksi (TyEL)",
        "Ylimääräiset eläkkeet ja muut eläkemenot",
        "2 797 000",
    ],
    [
        "33.50.50",
        "Kansaneläkeindeksi (KEL)",
        "Rintamalisät",
        "3 500 000",
    ],
    [
        "33.20.55",
        "Kansaneläkeindeksi (KEL)",
        "Valtionosuudet Työllisyysrahastolle",
        "1 595 000",
    ],
];

#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    SCENARIO_POINTS
        .iter()
        .map(|(label, points)| Scenario::new(*label, points.to_vec()))
        .collect()
}

/// Explicit layout of [`INDEX_TABLE_ROWS`].
pub fn index_table_schema() -> PageResult<TableSchema> {
    TableSchema::new([
        ColumnSpec::new(INDEX_TABLE_HEADERS[0], ColumnKind::Identifier),
        ColumnSpec::new(INDEX_TABLE_HEADERS[1], ColumnKind::Text),
        ColumnSpec::new(INDEX_TABLE_HEADERS[2], ColumnKind::Text),
        ColumnSpec::new(INDEX_TABLE_HEADERS[3], ColumnKind::Numeric),
    ])
}

#[must_use]
pub fn index_table_rows() -> Vec<Vec<String>> {
    INDEX_TABLE_ROWS
        .iter()
        .map(|row| row.iter().map(|cell| (*cell).to_owned()).collect())
        .collect()
}

/// Static text shown in a collapsible section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionText {
    pub id: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const METHODOLOGY: SectionText = SectionText {
    id: "methodology",
    title: "Menetelmä",
    paragraphs: &[
        "Skenaariot on laskettu indeksiin sidottujen momenttien vuoden 2025 lähtöarvoista.",
        "Epävarmuusväli kuvaa 10/90-kvantiileja: suhteellinen epävarmuus kasvaa lineaarisesti 1 prosentista vuonna 2025 5 prosenttiin vuonna 2035.",
    ],
};

pub const LIMITATIONS: SectionText = SectionText {
    id: "limitations",
    title: "Rajoitukset",
    paragraphs: &[
        "Laskelma ei huomioi lainsäädäntömuutoksia eikä indeksien välisiä riippuvuuksia.",
        "Skenaarioiden vuosiarvot ovat lineaarisia approksimaatioita.",
    ],
};

pub const REFERENCES: SectionText = SectionText {
    id: "references",
    title: "Lähteet",
    paragraphs: &["Valtion talousarvioesitys 2025, indeksisidonnaiset momentit."],
};

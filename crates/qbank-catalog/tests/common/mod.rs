//! Shared fixtures: an in-memory lake seeded with a two-subject question bank.

#![allow(dead_code)]

use qbank_catalog::Catalog;
use qbank_config::CatalogConfig;
use qbank_lake::QbankLake;

pub const HEADER: &str = "QuestionID,Image Filename,Year,Month,Subject,Paper Type,Timezone,Level,Question Number,Syllabus,Markscheme Answer";

pub const PHYSICS_ROWS: &[&str] = &[
    "P01,p01.png,2019,May,Physics,Paper 1,TZ1,HL,1,A1,A",
    "P02,p02.png,2019,May,Physics,Paper 2,TZ1,HL,2,A2,",
    "P03,p03.png,2020,Nov,Physics,Paper 1,TZ0,SL,3,A1,C",
    "P04,p04.png,2020,May,Physics,Paper 1,TZ2,SL,4,B1,D",
    "P05,p05.png,2021,May,Physics,Paper 2,TZ1,HL,5,A1,",
    "P06,p06.png,2021,Nov,Physics,Paper 3,TZ0,HL,6,B2,B",
    "P07,p07.png,2021,May,Physics,Paper 1,TZ2,SL,7,A1,A",
    "P08,p08.png,2022,May,Physics,Paper 1,TZ1,HL,8,B1,",
    "P09,p09.png,2022,Nov,Physics,Paper 2,TZ0,SL,9,A1,C",
    "P10,p10.png,2023,May,Physics,Paper 1,TZ2,HL,10,A2,D",
    "P11,p11.png,2023,May,Physics Extension,Paper 1,TZ1,HL,11,A1,A",
];

pub const CHEMISTRY_ROWS: &[&str] = &[
    "C1,c1.png,2018,May,Chemistry,Paper 1,TZ1,SL,1,S1,B",
    "C2,c2.png,2019,Nov,Chemistry,Paper 2,TZ0,HL,2,S2,",
];

pub fn table_csv(rows: &[&str]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

/// Lake with Physics (present), Chemistry (present) and Biology (data file missing).
pub async fn seeded_lake() -> QbankLake {
    let lake = QbankLake::in_memory("QuestionBank");
    lake.write(
        "QuestionBankSubjects.csv",
        "Subject,DataFile\nPhysics,physics.csv\nChemistry,chemistry.csv\nBiology,biology.csv\n",
    )
    .await
    .unwrap();
    lake.write("physics.csv", table_csv(PHYSICS_ROWS)).await.unwrap();
    lake.write("chemistry.csv", table_csv(CHEMISTRY_ROWS))
        .await
        .unwrap();
    lake
}

pub async fn open_catalog() -> Catalog {
    Catalog::open(seeded_lake().await, &CatalogConfig::default())
        .await
        .expect("catalog opens")
}

//! Spawns the HTTP server over a seeded in-memory lake.

#![allow(dead_code)]

use qbank_config::QbankConfig;
use qbank_lake::QbankLake;
use qbank_server::AppState;
use tokio::net::TcpListener;

pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\nq1-bytes";

const HEADER: &str = "QuestionID,Image Filename,Year,Month,Subject,Paper Type,Timezone,Level,Question Number,Syllabus,Markscheme Answer";

pub struct TestServer {
    pub base: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        let response = self.get(path).await;
        assert_eq!(response.status(), 200, "GET {path}");
        response.json().await.unwrap()
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.client.post(self.url(path)).send().await.unwrap()
    }

    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }
}

pub async fn seeded_lake() -> QbankLake {
    let lake = QbankLake::in_memory("QuestionBank");
    lake.write(
        "QuestionBankSubjects.csv",
        "Subject,DataFile\nMaths,maths.csv\nPhysics,physics.csv\nBiology,biology.csv\n",
    )
    .await
    .unwrap();
    lake.write(
        "maths.csv",
        format!(
            "{HEADER}\n\
             Q1,q1.png,2020,May,Maths,Paper 1,TZ1,HL,1,A1,B\n\
             Q2,q2.png,2021,Nov,Maths,Paper 2,TZ2,SL,2,A2,\n"
        ),
    )
    .await
    .unwrap();
    lake.write(
        "physics.csv",
        format!("{HEADER}\nP1,p1.png,2019.0,May,Physics,Paper 1,TZ0,HL,3.0,C1,D\n"),
    )
    .await
    .unwrap();
    lake.write("questions/q1.png", PNG).await.unwrap();
    lake
}

pub async fn spawn() -> TestServer {
    spawn_with(QbankConfig::default()).await
}

pub async fn spawn_with(config: QbankConfig) -> TestServer {
    let state = AppState::load(config, seeded_lake().await)
        .await
        .expect("catalog loads");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(qbank_server::serve(listener, state, std::future::pending()));
    TestServer {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
    }
}

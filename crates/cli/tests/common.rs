// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const TOKEN: &str = "token-1";
pub const SESSION_PATH: &str = "/redfish/v1/SessionService/Sessions/admin1/";
pub const BIOS_SETTINGS_PATH: &str = "/redfish/v1/Systems/1/Bios/Settings/";
pub const ACTION_PATH: &str = "/redfish/v1/Managers/1/Actions/Oem/Hpe/HpeiLO.iLOFunctionality/";

/// A mock Gen10 iLO plus an isolated config/cache home for the binary.
pub struct FakeIlo {
    pub server: ServerGuard,
    pub home: TempDir,
    mocks: Vec<Mock>,
}

impl FakeIlo {
    /// A rack-mount server.
    pub fn new() -> Self {
        Self::with_chassis_type("RackMount")
    }

    pub fn with_chassis_type(chassis_type: &str) -> Self {
        let mut ilo = FakeIlo {
            server: mockito::Server::new(),
            home: TempDir::new().unwrap(),
            mocks: Vec::new(),
        };
        ilo.serve_tree(chassis_type);
        ilo
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// The `ilorest` binary pointed at this home's config and cache.
    pub fn ilorest(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ilorest");
        cmd.env("ILOREST_CACHE_DIR", self.home.path().join("cache"))
            .env("ILOREST_CONFIG", self.home.path().join("config.toml"))
            .env_remove("ILOREST_LOG")
            .env_remove("ILOREST_TIMINGS");
        cmd
    }

    /// Logs in as `admin`.
    pub fn login(&self) {
        self.ilorest()
            .args(["login", &self.url(), "-u", "admin", "-p", "password"])
            .assert()
            .success();
    }

    /// Writes `config.toml` with the URL and credentials of this iLO.
    pub fn write_config(&self) {
        let config = format!(
            "url = \"{}\"\nusername = \"admin\"\npassword = \"password\"\n",
            self.url()
        );
        std::fs::write(self.home.path().join("config.toml"), config).unwrap();
    }

    /// Registers an authenticated mock; the caller asserts on it.
    pub fn expect(&mut self, method: &str, path: &str, status: usize, body: Option<Value>) -> Mock {
        let mut mock = self
            .server
            .mock(method, path)
            .match_header("x-auth-token", TOKEN)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body("{}");
        if let Some(body) = body {
            mock = mock.match_body(Matcher::Json(body));
        }
        mock.create()
    }

    fn get(&mut self, path: &str, body: Value) {
        let mock = self
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create();
        self.mocks.push(mock);
    }

    /// Registers the session resources and a Gen10 tree. Unmatched
    /// requests, such as a login with other credentials, get mockito's 501.
    fn serve_tree(&mut self, chassis_type: &str) {
        let location = format!("{}{}", self.url(), SESSION_PATH);
        let login = self
            .server
            .mock("POST", "/redfish/v1/SessionService/Sessions/")
            .match_body(Matcher::Json(
                json!({ "UserName": "admin", "Password": "password" }),
            ))
            .with_status(201)
            .with_header("X-Auth-Token", TOKEN)
            .with_header("Location", &location)
            .with_body("{}")
            .create();
        self.mocks.push(login);

        self.get(
            "/redfish/v1/",
            json!({
                "@odata.type": "#ServiceRoot.v1_5_0.ServiceRoot",
                "Oem": { "Hpe": {} },
                "Systems": { "@odata.id": "/redfish/v1/Systems/" },
                "Chassis": { "@odata.id": "/redfish/v1/Chassis/" },
                "Managers": { "@odata.id": "/redfish/v1/Managers/" },
            }),
        );
        self.get(
            "/redfish/v1/Systems/",
            json!({
                "@odata.type": "#ComputerSystemCollection.ComputerSystemCollection",
                "Members": [{ "@odata.id": "/redfish/v1/Systems/1/" }],
            }),
        );
        self.get(
            "/redfish/v1/Systems/1/",
            json!({
                "@odata.type": "#ComputerSystem.v1_4_0.ComputerSystem",
                "AssetTag": "",
                "Bios": { "@odata.id": "/redfish/v1/Systems/1/Bios/" },
            }),
        );
        self.get(
            "/redfish/v1/Systems/1/Bios/",
            json!({
                "@odata.type": "#Bios.v1_0_0.Bios",
                "Attributes": { "BootMode": "Uefi" },
                "@Redfish.Settings": { "SettingsObject": { "@odata.id": BIOS_SETTINGS_PATH } },
            }),
        );
        self.get(
            "/redfish/v1/Chassis/",
            json!({
                "@odata.type": "#ChassisCollection.ChassisCollection",
                "Members": [{ "@odata.id": "/redfish/v1/Chassis/1/" }],
            }),
        );
        self.get(
            "/redfish/v1/Chassis/1/",
            json!({ "@odata.type": "#Chassis.v1_6_0.Chassis", "ChassisType": chassis_type }),
        );
        self.get(
            "/redfish/v1/Managers/",
            json!({
                "@odata.type": "#ManagerCollection.ManagerCollection",
                "Members": [{ "@odata.id": "/redfish/v1/Managers/1/" }],
            }),
        );
        self.get(
            "/redfish/v1/Managers/1/",
            json!({
                "@odata.type": "#Manager.v1_5_1.Manager",
                "Oem": { "Hpe": { "Actions": {
                    "#HpeiLO.iLOFunctionality": { "target": ACTION_PATH }
                } } },
            }),
        );
    }
}

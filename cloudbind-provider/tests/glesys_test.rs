//! GleSYS binding tests
//!
//! Mock-server tests run by default. Live tests:
//! ```bash
//! GLESYS_USERNAME=cl12345 GLESYS_API_KEY=xxx \
//!     cargo test -p cloudbind-provider --test glesys_test -- --ignored --nocapture
//! ```

mod common;

use common::{LiveContext, glesys_at};
use cloudbind_provider::{
    CloudProvider, GlesysProvider, ProviderClient, ProviderError, ServerApi, ServerCloneOptions,
    ServerCreateOptions, ServerDestroyOptions, ServerEditOptions, ServerSpec, ServerState,
    ServerStatusOptions, ServerStopOptions,
};
use mockito::{Matcher, Server};

const AUTH: &str = "Basic Y2wxMjM0NTpzZWNyZXQ=";

const DETAILS: &str = r#"{"response":{"status":{"code":200,"text":"OK"},"server":{
    "serverid":"xm3276891","hostname":"web1","description":"frontend",
    "cpucores":2,"memorysize":"1024","disksize":20,"transfer":"500",
    "templatename":"Debian 12 64-bit","datacenter":"Falkenberg","platform":"Xen",
    "state":"running","cost":{"amount":20.5,"currency":"SEK","timeperiod":"month"},
    "iplist":[{"ipaddress":"109.74.10.45","version":4,"cost":"2"}]}}}"#;

const OK: &str = r#"{"response":{"status":{"code":200,"text":"OK"}}}"#;

const LIMITS: &str = r#"{"response":{"status":{"code":200,"text":"OK"},"limits":{
    "numproc":{"held":"22","maxheld":"38","barrier":"128","limit":"128","failcnt":"0"},
    "privvmpages":{"held":12208,"maxheld":29402,"barrier":65536,"limit":69632,"failcnt":3}}}}"#;

fn sample_spec() -> ServerSpec {
    ServerSpec {
        datacenter: "Falkenberg".into(),
        platform: "Xen".into(),
        hostname: "web1".into(),
        template_name: "Debian 12 64-bit".into(),
        disk_size_gb: 20,
        memory_size_mb: 1024,
        cpu_cores: 2,
        root_password: "pw".into(),
        transfer_gb: 500,
    }
}

fn not_found_body() -> &'static str {
    r#"{"response":{"status":{"code":400,"text":"Could not find server with id xm404"}}}"#
}

#[tokio::test]
async fn list_servers_sends_basic_auth() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/list/format/json")
        .match_header("authorization", AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response":{"status":{"code":200,"text":"OK"},"servers":[
                {"serverid":"xm3276891","hostname":"web1","datacenter":"Falkenberg","platform":"Xen"},
                {"serverid":"vz1541880","hostname":"db1","datacenter":"Stockholm","platform":"OpenVZ"}]}}"#,
        )
        .create_async()
        .await;

    let servers = glesys_at(&server.url()).list_servers().await.unwrap();

    mock.assert_async().await;
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[1].id, "vz1541880");
    assert_eq!(servers[1].platform, "OpenVZ");
}

#[tokio::test]
async fn server_details_decodes_mixed_numbers() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/server/details/format/json")
        .match_body(Matcher::UrlEncoded("serverid".into(), "xm3276891".into()))
        .with_status(200)
        .with_body(DETAILS)
        .create_async()
        .await;

    let details = glesys_at(&server.url())
        .get_server_details("xm3276891")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(details.memory_size_mb, 1024);
    assert_eq!(details.transfer_gb, 500);
    assert_eq!(details.state, Some(ServerState::Running));
    assert_eq!(details.ips[0].cost, Some(2.0));
}

#[tokio::test]
async fn unknown_server_is_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/server/details/format/json")
        .with_status(400)
        .with_body(not_found_body())
        .create_async()
        .await;

    let details = glesys_at(&server.url())
        .get_server_details("xm404")
        .await
        .unwrap();
    assert!(details.is_none());
}

#[tokio::test]
async fn api_status_code_overrides_http_200() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/server/console/format/json")
        .with_status(200)
        .with_body(r#"{"response":{"status":{"code":"404","text":"Server not found"}}}"#)
        .create_async()
        .await;

    let console = glesys_at(&server.url())
        .get_server_console("xm404")
        .await
        .unwrap();
    assert!(console.is_none());
}

#[tokio::test]
async fn status_options_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/status/format/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("serverid".into(), "xm1".into()),
            Matcher::UrlEncoded("statustype".into(), "state".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"response":{"status":{"code":200,"text":"OK"},"server":{"state":"stopped"}}}"#)
        .create_async()
        .await;

    let status = glesys_at(&server.url())
        .get_server_status("xm1", &ServerStatusOptions::status_type("state"))
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(status.state, ServerState::Stopped);
    assert!(status.cpu.is_none());
}

#[tokio::test]
async fn create_server_posts_every_argument() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/create/format/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("datacenter".into(), "Falkenberg".into()),
            Matcher::UrlEncoded("platform".into(), "Xen".into()),
            Matcher::UrlEncoded("hostname".into(), "web1".into()),
            Matcher::UrlEncoded("templatename".into(), "Debian 12 64-bit".into()),
            Matcher::UrlEncoded("disksize".into(), "20".into()),
            Matcher::UrlEncoded("memorysize".into(), "1024".into()),
            Matcher::UrlEncoded("cpucores".into(), "2".into()),
            Matcher::UrlEncoded("rootpassword".into(), "s3cr3t&pw".into()),
            Matcher::UrlEncoded("transfer".into(), "500".into()),
            Matcher::UrlEncoded("description".into(), "frontend".into()),
        ]))
        .with_status(200)
        .with_body(DETAILS)
        .create_async()
        .await;

    let spec = ServerSpec {
        datacenter: "Falkenberg".into(),
        platform: "Xen".into(),
        hostname: "web1".into(),
        template_name: "Debian 12 64-bit".into(),
        disk_size_gb: 20,
        memory_size_mb: 1024,
        cpu_cores: 2,
        root_password: "s3cr3t&pw".into(),
        transfer_gb: 500,
    };
    let details = glesys_at(&server.url())
        .create_server(&spec, &ServerCreateOptions::default().description("frontend"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(details.id, "xm3276891");
}

#[tokio::test]
async fn create_server_rejects_empty_hostname_locally() {
    let spec = ServerSpec {
        datacenter: "Falkenberg".into(),
        platform: "Xen".into(),
        hostname: " ".into(),
        template_name: "Debian 12 64-bit".into(),
        disk_size_gb: 20,
        memory_size_mb: 1024,
        cpu_cores: 2,
        root_password: "pw".into(),
        transfer_gb: 500,
    };
    // Nothing listens here; the request must not be sent.
    let err = glesys_at("http://127.0.0.1:9")
        .create_server(&spec, &ServerCreateOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::InvalidParameter { ref param, .. } if param == "hostname"));
}

#[tokio::test]
async fn stop_and_destroy_send_their_flags() {
    let mut server = Server::new_async().await;
    let stop = server
        .mock("POST", "/server/stop/format/json")
        .match_body(Matcher::UrlEncoded("type".into(), "hard".into()))
        .with_status(200)
        .with_body(r#"{"response":{"status":{"code":200,"text":"OK"}}}"#)
        .create_async()
        .await;
    let destroy = server
        .mock("POST", "/server/destroy/format/json")
        .match_body(Matcher::UrlEncoded("keepip".into(), "1".into()))
        .with_status(200)
        .with_body(DETAILS)
        .create_async()
        .await;

    let glesys = glesys_at(&server.url());
    glesys
        .stop_server("xm3276891", Some(ServerStopOptions::Hard))
        .await
        .unwrap();
    glesys
        .destroy_server("xm3276891", ServerDestroyOptions::KeepIp)
        .await
        .unwrap();

    stop.assert_async().await;
    destroy.assert_async().await;
}

#[tokio::test]
async fn stop_without_options_leaves_type_out() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/stop/format/json")
        .match_body(Matcher::Exact("serverid=xm3276891".into()))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;

    glesys_at(&server.url())
        .stop_server("xm3276891", None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn limits_are_keyed_by_name() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/limits/format/json")
        .match_body(Matcher::UrlEncoded("serverid".into(), "vz1541880".into()))
        .with_status(200)
        .with_body(LIMITS)
        .create_async()
        .await;

    let limits = glesys_at(&server.url())
        .get_server_limits("vz1541880")
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(limits.len(), 2);
    let numproc = &limits["numproc"];
    assert_eq!(numproc.held, 22);
    assert_eq!(numproc.max_held, 38);
    assert_eq!(numproc.barrier, 128);
    assert_eq!(limits["privvmpages"].fail_count, 3);
}

#[tokio::test]
async fn reset_limit_posts_limit_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/resetlimit/format/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("serverid".into(), "vz1541880".into()),
            Matcher::UrlEncoded("type".into(), "privvmpages".into()),
        ]))
        .with_status(200)
        .with_body(LIMITS)
        .create_async()
        .await;

    let limits = glesys_at(&server.url())
        .reset_server_limit("vz1541880", "privvmpages")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(limits["privvmpages"].limit, 69632);
}

#[tokio::test]
async fn reboot_and_start_return_details() {
    let mut server = Server::new_async().await;
    let reboot = server
        .mock("POST", "/server/reboot/format/json")
        .match_body(Matcher::UrlEncoded("serverid".into(), "xm3276891".into()))
        .with_status(200)
        .with_body(DETAILS)
        .create_async()
        .await;
    let start = server
        .mock("POST", "/server/start/format/json")
        .match_body(Matcher::UrlEncoded("serverid".into(), "xm3276891".into()))
        .with_status(200)
        .with_body(DETAILS)
        .create_async()
        .await;

    let glesys = glesys_at(&server.url());
    let rebooted = glesys.reboot_server("xm3276891").await.unwrap();
    let started = glesys.start_server("xm3276891").await.unwrap();

    reboot.assert_async().await;
    start.assert_async().await;
    assert_eq!(rebooted.state, Some(ServerState::Running));
    assert_eq!(started.hostname, "web1");
}

#[tokio::test]
async fn edit_sends_only_changed_settings() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/edit/format/json")
        .match_body(Matcher::Exact(
            "serverid=xm3276891&memorysize=2048&description=frontend%20v2".into(),
        ))
        .with_status(200)
        .with_body(DETAILS)
        .create_async()
        .await;

    let options = ServerEditOptions::default()
        .memory_size_mb(2048)
        .description("frontend v2");
    let details = glesys_at(&server.url())
        .edit_server("xm3276891", &options)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(details.id, "xm3276891");
}

#[tokio::test]
async fn clone_posts_new_hostname() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/clone/format/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("serverid".into(), "xm3276891".into()),
            Matcher::UrlEncoded("hostname".into(), "web2".into()),
            Matcher::UrlEncoded("datacenter".into(), "Stockholm".into()),
        ]))
        .with_status(200)
        .with_body(DETAILS)
        .create_async()
        .await;

    let details = glesys_at(&server.url())
        .clone_server(
            "xm3276891",
            "web2",
            &ServerCloneOptions::default().datacenter("Stockholm"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(details.template_name.as_deref(), Some("Debian 12 64-bit"));
}

#[tokio::test]
async fn reset_password_posts_root_password() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/resetpassword/format/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("serverid".into(), "xm3276891".into()),
            Matcher::UrlEncoded("rootpassword".into(), "n3w&pw".into()),
        ]))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;

    glesys_at(&server.url())
        .reset_password("xm3276891", "n3w&pw")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn resource_usage_decodes_series() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/resourceusage/format/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("serverid".into(), "xm3276891".into()),
            Matcher::UrlEncoded("resource".into(), "cpuusage".into()),
            Matcher::UrlEncoded("resolution".into(), "hour".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"response":{"status":{"code":200,"text":"OK"},"usage":{
                "info":{"type":"cpuusage","resolution":"hour","unit":"%"},
                "values":[{"timestamp":"2024-05-01 10:00:00","value":"12.5"},
                          {"timestamp":"2024-05-01 11:00:00","value":40}]}}}"#,
        )
        .create_async()
        .await;

    let usage = glesys_at(&server.url())
        .resource_usage("xm3276891", "cpuusage", "hour")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(usage.info.resource, "cpuusage");
    assert_eq!(usage.info.unit.as_deref(), Some("%"));
    assert_eq!(usage.values.len(), 2);
    assert!((usage.values[0].value - 12.5).abs() < f64::EPSILON);
    assert!(usage.values[1].timestamp > usage.values[0].timestamp);
}

#[tokio::test]
async fn console_decodes_connection() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/console/format/json")
        .match_body(Matcher::UrlEncoded("serverid".into(), "xm3276891".into()))
        .with_status(200)
        .with_body(
            r#"{"response":{"status":{"code":200,"text":"OK"},"console":{
                "host":"vnc.glesys.com","port":"5901","password":"x7Gk2","protocol":"vnc"}}}"#,
        )
        .create_async()
        .await;

    let console = glesys_at(&server.url())
        .get_server_console("xm3276891")
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(console.host, "vnc.glesys.com");
    assert_eq!(console.port, 5901);
    assert_eq!(console.password, "x7Gk2");
    assert_eq!(console.protocol.as_deref(), Some("vnc"));
}

#[tokio::test]
async fn templates_are_flattened() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/server/templates/format/json")
        .with_status(200)
        .with_body(
            r#"{"response":{"status":{"code":200,"text":"OK"},"templates":{
                "OpenVZ":[{"name":"Centos 5","minimumdisksize":"5","minimummemorysize":"128","operatingsystem":"centos","platform":"OpenVZ"}],
                "Xen":[{"name":"Debian 12 64-bit","minimumdisksize":5,"minimummemorysize":512,"operatingsystem":"debian","platform":"Xen"},
                       {"name":"Ubuntu 24.04","minimumdisksize":5,"minimummemorysize":512,"operatingsystem":"ubuntu","platform":"Xen"}]}}}"#,
        )
        .create_async()
        .await;

    let templates = glesys_at(&server.url()).get_templates().await.unwrap();
    assert_eq!(templates.len(), 3);
    assert!(templates.iter().any(|t| t.name == "Centos 5" && t.min_memory_size_mb == 128));
}

#[tokio::test]
async fn all_server_details_skips_vanished_servers() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("POST", "/server/list/format/json")
        .with_status(200)
        .with_body(
            r#"{"response":{"status":{"code":200,"text":"OK"},"servers":[
                {"serverid":"xm3276891","hostname":"web1","datacenter":"Falkenberg","platform":"Xen"},
                {"serverid":"xm404","hostname":"gone","datacenter":"Falkenberg","platform":"Xen"}]}}"#,
        )
        .create_async()
        .await;
    let _found = server
        .mock("POST", "/server/details/format/json")
        .match_body(Matcher::UrlEncoded("serverid".into(), "xm3276891".into()))
        .with_status(200)
        .with_body(DETAILS)
        .create_async()
        .await;
    let _gone = server
        .mock("POST", "/server/details/format/json")
        .match_body(Matcher::UrlEncoded("serverid".into(), "xm404".into()))
        .with_status(400)
        .with_body(not_found_body())
        .create_async()
        .await;

    let details = glesys_at(&server.url())
        .get_all_server_details()
        .await
        .unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].hostname, "web1");
}

#[tokio::test]
async fn rejected_key_fails_validation() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/server/list/format/json")
        .with_status(401)
        .with_body(r#"{"response":{"status":{"code":401,"text":"Invalid API key"}}}"#)
        .create_async()
        .await;

    let valid = glesys_at(&server.url()).validate_credentials().await.unwrap();
    assert!(!valid);
}

#[tokio::test]
async fn gateway_errors_are_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/list/format/json")
        .with_status(503)
        .expect(2)
        .create_async()
        .await;

    let glesys = GlesysProvider::builder("cl12345".into(), "secret".into())
        .endpoint(server.url())
        .max_retries(1)
        .build();
    let err = glesys.list_servers().await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, ProviderError::NetworkError { .. }));
}

#[tokio::test]
async fn create_is_sent_once_after_gateway_timeout() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/server/create/format/json")
        .with_status(504)
        .expect(1)
        .create_async()
        .await;

    let glesys = GlesysProvider::builder("cl12345".into(), "secret".into())
        .endpoint(server.url())
        .max_retries(2)
        .build();
    let err = glesys
        .create_server(&sample_spec(), &ServerCreateOptions::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, ProviderError::NetworkError { .. }));
}

// ============ Live ============

#[tokio::test]
#[ignore = "integration test: requires GLESYS_USERNAME and GLESYS_API_KEY"]
async fn test_glesys_live_list_and_details() {
    skip_if_no_credentials!("GLESYS_USERNAME", "GLESYS_API_KEY");

    let ctx = require_some!(LiveContext::glesys(), "failed to build live context");
    let ProviderClient::Glesys(glesys) = ctx.client else {
        panic!("factory returned the wrong provider");
    };

    let valid = require_ok!(glesys.validate_credentials().await, "validate_credentials failed");
    assert!(valid, "credentials should be accepted");

    let servers = require_ok!(glesys.list_servers().await, "list_servers failed");
    if let Some(first) = servers.first() {
        let details = require_ok!(glesys.get_server_details(&first.id).await);
        let details = require_some!(details, "listed server has no details");
        assert_eq!(details.id, first.id);
    }

    let allowed = require_ok!(glesys.get_server_allowed_arguments().await);
    assert!(!allowed.is_empty(), "every account can create some server");
    println!("✓ {} servers, platforms {:?}", servers.len(), allowed.keys());
}

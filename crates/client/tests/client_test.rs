use mockall::{predicate::eq, Sequence};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use rstest::rstest;
use telehealth_client::{error::ApiError, mock::MockProviderApi, ProviderScheduleClient};
use telehealth_core::{
    form::{FormDraft, FormField, FormMode},
    models::{
        provider::{Provider, ProviderPayload},
        schedule::Schedule,
    },
    state::{ErrorPolicy, LoadOutcome},
};

fn dr_a() -> Provider {
    Provider {
        id: 1,
        name: "Dr. A".to_string(),
        availability_start: "09:00".to_string(),
        availability_end: "12:00".to_string(),
    }
}

fn dr_b() -> Provider {
    Provider {
        id: 2,
        name: "Dr. B".to_string(),
        availability_start: "13:00".to_string(),
        availability_end: "17:00".to_string(),
    }
}

fn server_error() -> ApiError {
    ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Expects the initial mount to load `providers`. Must be registered before
/// any later `list_providers` expectation.
fn expect_mount(api: &mut MockProviderApi, seq: &mut Sequence, providers: Vec<Provider>) {
    api.expect_list_providers()
        .times(1)
        .in_sequence(seq)
        .returning(move || Ok(providers.clone()));
}

async fn mounted(api: MockProviderApi) -> ProviderScheduleClient<MockProviderApi> {
    let client = ProviderScheduleClient::new(api, ErrorPolicy::Sticky);
    assert_eq!(client.mount().await, LoadOutcome::Applied);
    client
}

#[tokio::test]
async fn test_mount_loads_providers_in_server_order() {
    let mut api = MockProviderApi::new();
    api.expect_list_providers()
        .times(1)
        .returning(|| Ok(vec![dr_b(), dr_a()]));
    let client = ProviderScheduleClient::new(api, ErrorPolicy::Sticky);

    client.mount().await;

    let state = client.snapshot().await;
    assert_eq!(state.providers(), &[dr_b(), dr_a()]);
    assert_eq!(state.error(), None);
}

#[rstest]
#[case("", "09:00", "12:00")]
#[case("Dr. A", "", "12:00")]
#[case("Dr. A", "09:00", "")]
#[tokio::test]
async fn test_submit_with_empty_field_sends_nothing(
    #[case] name: &str,
    #[case] start: &str,
    #[case] end: &str,
) {
    // No expectations: any request would panic.
    let client = ProviderScheduleClient::new(MockProviderApi::new(), ErrorPolicy::Sticky);
    client.set_field(FormField::Name, name).await;
    client.set_field(FormField::AvailabilityStart, start).await;
    client.set_field(FormField::AvailabilityEnd, end).await;

    client.submit().await;

    let state = client.snapshot().await;
    assert_eq!(state.error(), Some("Please fill in all fields"));
    assert_eq!(state.form().name, name);
}

#[test_log::test(tokio::test)]
async fn test_create_is_followed_by_exactly_one_reload() {
    let mut seq = Sequence::new();
    let mut api = MockProviderApi::new();
    api.expect_create_provider()
        .with(eq(ProviderPayload {
            name: "Dr. B".to_string(),
            availability_start: "13:00".to_string(),
            availability_end: "17:00".to_string(),
        }))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    api.expect_list_providers()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![dr_b()]));
    let client = ProviderScheduleClient::new(api, ErrorPolicy::Sticky);

    client.set_field(FormField::Name, "Dr. B").await;
    client.set_field(FormField::AvailabilityStart, "13:00").await;
    client.set_field(FormField::AvailabilityEnd, "17:00").await;
    client.submit().await;

    let state = client.snapshot().await;
    assert_eq!(state.providers(), &[dr_b()]);
    assert_eq!(state.form(), &FormDraft::default());
}

#[tokio::test]
async fn test_edit_then_submit_updates_by_id() {
    let mut seq = Sequence::new();
    let mut api = MockProviderApi::new();
    api.expect_list_providers()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![dr_a()]));
    api.expect_update_provider()
        .with(eq(1_i64), eq(ProviderPayload::from(&dr_a())))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    api.expect_list_providers()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![dr_a()]));
    let client = ProviderScheduleClient::new(api, ErrorPolicy::Sticky);
    client.mount().await;

    assert!(client.begin_edit_by_id(1).await);
    assert_eq!(client.snapshot().await.form().mode(), FormMode::Editing);
    client.submit().await;

    let state = client.snapshot().await;
    assert_eq!(state.form().mode(), FormMode::Idle);
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn test_failed_update_keeps_draft_and_list() {
    let mut seq = Sequence::new();
    let mut api = MockProviderApi::new();
    expect_mount(&mut api, &mut seq, vec![dr_a()]);
    api.expect_update_provider()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Err(server_error()));
    let client = mounted(api).await;

    client.begin_edit(&dr_a()).await;
    client.set_field(FormField::Name, "Dr. A-Renamed").await;
    let draft_before = client.snapshot().await.form().clone();
    client.submit().await;

    let state = client.snapshot().await;
    assert_eq!(state.error(), Some("Failed to update provider"));
    assert_eq!(state.form(), &draft_before);
    assert_eq!(state.providers(), &[dr_a()]);
}

#[tokio::test]
async fn test_failed_create_reports_add_failure() {
    let mut api = MockProviderApi::new();
    api.expect_create_provider()
        .times(1)
        .returning(|_| Err(server_error()));
    let client = ProviderScheduleClient::new(api, ErrorPolicy::Sticky);

    client.set_field(FormField::Name, "Dr. C").await;
    client.set_field(FormField::AvailabilityStart, "08:00").await;
    client.set_field(FormField::AvailabilityEnd, "09:00").await;
    client.submit().await;

    let state = client.snapshot().await;
    assert_eq!(state.error(), Some("Failed to add provider"));
    assert_eq!(state.form().mode(), FormMode::Creating);
}

#[tokio::test]
async fn test_delete_is_followed_by_exactly_one_reload() {
    let mut seq = Sequence::new();
    let mut api = MockProviderApi::new();
    expect_mount(&mut api, &mut seq, vec![dr_a(), dr_b()]);
    api.expect_delete_provider()
        .with(eq(1_i64))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    api.expect_list_providers()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![dr_b()]));
    let client = mounted(api).await;

    client.delete(1).await;

    assert_eq!(client.snapshot().await.providers(), &[dr_b()]);
}

#[tokio::test]
async fn test_failed_delete_keeps_provider() {
    let mut seq = Sequence::new();
    let mut api = MockProviderApi::new();
    expect_mount(&mut api, &mut seq, vec![dr_a()]);
    api.expect_delete_provider()
        .with(eq(1_i64))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(ApiError::Status(StatusCode::NOT_FOUND)));
    let client = mounted(api).await;

    client.delete(1).await;

    let state = client.snapshot().await;
    assert_eq!(state.providers(), &[dr_a()]);
    assert_eq!(state.error(), Some("Failed to delete provider"));
}

#[tokio::test]
async fn test_failed_reload_leaves_collection_unchanged() {
    let mut seq = Sequence::new();
    let mut api = MockProviderApi::new();
    expect_mount(&mut api, &mut seq, vec![dr_a()]);
    api.expect_list_providers()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Err(server_error()));
    let client = mounted(api).await;

    assert_eq!(client.load_providers().await, LoadOutcome::Failed);

    let state = client.snapshot().await;
    assert_eq!(state.providers(), &[dr_a()]);
    assert_eq!(state.error(), Some("Failed to fetch providers"));
}

#[tokio::test]
async fn test_begin_edit_then_cancel_leaves_list_and_error() {
    let mut seq = Sequence::new();
    let mut api = MockProviderApi::new();
    expect_mount(&mut api, &mut seq, vec![dr_a()]);
    api.expect_get_schedule()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Err(server_error()));
    let client = mounted(api).await;
    client.load_schedule().await;

    client.begin_edit(&dr_a()).await;
    client.cancel_edit().await;

    let state = client.snapshot().await;
    assert_eq!(state.form(), &FormDraft::default());
    assert_eq!(state.providers(), &[dr_a()]);
    assert_eq!(state.error(), Some("Failed to fetch schedule"));
}

#[tokio::test]
async fn test_begin_edit_by_unknown_id_changes_nothing() {
    let mut seq = Sequence::new();
    let mut api = MockProviderApi::new();
    expect_mount(&mut api, &mut seq, vec![dr_a()]);
    let client = mounted(api).await;

    assert!(!client.begin_edit_by_id(99).await);
    assert_eq!(client.snapshot().await.form().mode(), FormMode::Idle);
}

#[tokio::test]
async fn test_load_schedule_replaces_mapping() {
    let mut schedule = Schedule::new();
    schedule.insert(
        "Dr. A".to_string(),
        vec!["09:00".to_string(), "09:30".to_string()],
    );
    let returned = schedule.clone();

    let mut api = MockProviderApi::new();
    api.expect_get_schedule()
        .times(1)
        .returning(move || Ok(returned.clone()));
    let client = ProviderScheduleClient::new(api, ErrorPolicy::Sticky);

    assert_eq!(client.load_schedule().await, LoadOutcome::Applied);
    assert_eq!(client.snapshot().await.schedule(), &schedule);
}

#[tokio::test]
async fn test_provider_mutations_do_not_refresh_schedule() {
    let mut seq = Sequence::new();
    let mut api = MockProviderApi::new();
    expect_mount(&mut api, &mut seq, vec![dr_a()]);
    api.expect_delete_provider()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    api.expect_list_providers()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![]));
    // get_schedule has no expectation and would panic if called.
    let client = mounted(api).await;

    client.delete(1).await;

    assert!(client.snapshot().await.schedule().is_empty());
}

#[rstest]
#[case(ErrorPolicy::Sticky, Some("Failed to fetch schedule"))]
#[case(ErrorPolicy::ClearOnSuccess, None)]
#[tokio::test]
async fn test_error_policy_after_success(
    #[case] policy: ErrorPolicy,
    #[case] expected: Option<&str>,
) {
    let mut seq = Sequence::new();
    let mut api = MockProviderApi::new();
    api.expect_get_schedule()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Err(server_error()));
    api.expect_list_providers()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![dr_a()]));
    let client = ProviderScheduleClient::new(api, policy);

    client.load_schedule().await;
    client.load_providers().await;

    assert_eq!(client.snapshot().await.error(), expected);
}

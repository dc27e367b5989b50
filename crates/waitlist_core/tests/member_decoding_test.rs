use chrono::{TimeZone, Utc};
use waitlist_core::{GuildMemberJson, classify, rank};

const MEMBERS_PAGE: &str = r#"[
  {
    "avatar": null,
    "banner": null,
    "communication_disabled_until": null,
    "flags": 0,
    "joined_at": "2023-08-10T17:21:43.116000+00:00",
    "nick": null,
    "pending": false,
    "premium_since": null,
    "roles": [],
    "unusual_dm_activity_until": null,
    "user": {
      "id": "80351110224678912",
      "username": "nelly",
      "avatar": "8342729096ea3675442027381ff50dfe",
      "discriminator": "0",
      "public_flags": 64,
      "flags": 64,
      "banner": null,
      "accent_color": null,
      "global_name": "Nelly",
      "avatar_decoration_data": {
        "asset": "a_fed43ab12698df65902ba06727e20c0e",
        "sku_id": "1144058844004233369",
        "expires_at": null
      },
      "banner_color": null,
      "clan": null
    },
    "mute": false,
    "deaf": false
  },
  {
    "joined_at": "2023-06-01T09:00:00.000000+00:00",
    "roles": ["1140732798773248121"],
    "user": { "id": "80351110224678913", "username": "tester", "bot": null },
    "mute": false,
    "deaf": false
  },
  {
    "joined_at": "2023-05-01T09:00:00+02:00",
    "roles": [],
    "user": { "id": "80351110224678914", "username": "helper-bot", "bot": true }
  },
  {
    "joined_at": "2023-07-04T00:00:00.000000+00:00",
    "user": { "id": "80351110224678915", "username": "early" }
  }
]"#;

#[test]
fn test_decodes_full_discord_member_payload() {
    let members: Vec<GuildMemberJson> =
        serde_json::from_str(MEMBERS_PAGE).expect("Decode members page");

    assert_eq!(members.len(), 4);

    let first = &members[0];
    assert_eq!(first.user().id(), "80351110224678912");
    assert_eq!(first.user().username(), "nelly");
    assert!(!first.user().is_bot());
    assert!(!first.has_roles());
    assert_eq!(
        *first.joined_at(),
        Utc.with_ymd_and_hms(2023, 8, 10, 17, 21, 43).unwrap()
            + chrono::Duration::milliseconds(116)
    );
}

#[test]
fn test_null_and_missing_optionals_are_defaults() {
    let members: Vec<GuildMemberJson> =
        serde_json::from_str(MEMBERS_PAGE).expect("Decode members page");

    assert_eq!(*members[1].user().bot(), None);
    assert!(members[3].roles().is_empty());
    assert!(members[2].user().is_bot());
}

#[test]
fn test_offsets_normalize_to_utc() {
    let members: Vec<GuildMemberJson> =
        serde_json::from_str(MEMBERS_PAGE).expect("Decode members page");

    assert_eq!(
        *members[2].joined_at(),
        Utc.with_ymd_and_hms(2023, 5, 1, 7, 0, 0).unwrap()
    );
}

#[test]
fn test_decoded_page_classifies_and_ranks() {
    let members: Vec<GuildMemberJson> =
        serde_json::from_str(MEMBERS_PAGE).expect("Decode members page");

    let classification = classify(&members);
    assert_eq!(*classification.tester_count(), 1);
    assert_eq!(*classification.excluded_bots(), 1);

    let ranked = rank(classification.into_candidates());
    let names: Vec<_> = ranked.iter().map(|c| c.username().as_str()).collect();
    assert_eq!(names, ["early", "nelly"]);
}

#[test]
fn test_malformed_member_is_rejected() {
    let missing_join = r#"[{ "roles": [], "user": { "id": "1", "username": "x" } }]"#;
    assert!(serde_json::from_str::<Vec<GuildMemberJson>>(missing_join).is_err());

    let bad_timestamp =
        r#"[{ "joined_at": "yesterday", "user": { "id": "1", "username": "x" } }]"#;
    assert!(serde_json::from_str::<Vec<GuildMemberJson>>(bad_timestamp).is_err());
}

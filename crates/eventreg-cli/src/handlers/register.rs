//! Register command handler.

use anyhow::{Result, anyhow};

use crate::bootstrap::CliContext;

/// Register a person for an event, both given by name.
pub async fn execute(ctx: &CliContext, person: &str, event: &str) -> Result<()> {
    let service = ctx.service();
    let person = service
        .get_person(person)
        .await?
        .ok_or_else(|| anyhow!("There is no such Person: {person}"))?;
    let event = service
        .get_event(event)
        .await?
        .ok_or_else(|| anyhow!("There is no such Event: {event}"))?;

    service.register(&person, &event).await?;
    println!("Registered '{}' for '{}'", person.name, event.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap;
    use chrono::{NaiveDate, NaiveTime};

    #[tokio::test]
    async fn test_register_persists_across_bootstraps() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("eventreg.db");

        let ctx = bootstrap(Some(db_path.clone())).await.unwrap();
        ctx.service().create_person("Bob").await.unwrap();
        ctx.service()
            .create_event(
                "Gala",
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            )
            .await
            .unwrap();
        execute(&ctx, "Bob", "Gala").await.unwrap();
        drop(ctx);

        let reopened = bootstrap(Some(db_path)).await.unwrap();
        let bob = reopened.service().get_person("Bob").await.unwrap().unwrap();
        let events = reopened
            .service()
            .get_events_attended_by_person(&bob)
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Gala");
    }

    #[tokio::test]
    async fn test_register_unknown_person_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = bootstrap(Some(dir.path().join("eventreg.db"))).await.unwrap();

        let err = execute(&ctx, "Ghost", "Gala").await.unwrap_err();
        assert!(err.to_string().contains("no such Person"));
    }
}

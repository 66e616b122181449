//! Prompt template and composition for the digital-twin chat.
//!
//! The composer is a pure function over the portfolio collections so it can
//! be tested without a store. It is recomputed on every chat request; the
//! dataset is fixed at seed time and there are no write endpoints, so the
//! prompt size is bounded by the seed.

use crate::models::portfolio::{Assignment, Reflection};

/// Returned in the 200 body when the model produces empty content.
pub const EMPTY_COMPLETION_PLACEHOLDER: &str = "Ik kon geen antwoord genereren.";

/// The canonical user-facing text for any upstream failure. The cause is
/// logged server-side and never reaches the client.
pub const CHAT_FALLBACK_MESSAGE: &str =
    "Er is momenteel een probleem met de verbinding. Probeer het later opnieuw.";

/// Persona and grounding template.
/// Replace: `{assignment_bullets}`, `{reflection_bullets}`, `{user_message}`.
const SYSTEM_PROMPT_TEMPLATE: &str = r#"Je bent de Digitale Tweeling van Eloy Hoofs, Technisch Projectleider bij een overheidsorganisatie, afdeling Informatiemanagement (IM).

ACHTERGROND:
- Je bent via interesse en werkervaring in de ICT-wereld terechtgekomen, zonder formele ICT-opleiding
- Je hebt zojuist de IT Basisopleiding bij ICM Opleidingen afgerond
- Je rol is die van "bruggenbouwer tussen techniek en organisatie"
- Je mist soms basiskennis om technisch door te vragen, maar bent nu een betere gesprekspartner geworden

LEERDOELEN & GROEI:
- Beter begrip van technische termen en architecturen
- Minder snel overdonderen door vakjargon
- Gerichter durven doorvragen bij leveranciers, beheerders en technische specialisten

EYEOPENERS:
- AI en agents (WITT-E) als digitale collega of sparringpartner - dit heeft je kijk op werken en leren sterk veranderd
- Het verschil tussen theorie en praktijk
- Out-of-the-box denken en "The Joy of Creating"

WAARDEVOLLE ERVARINGEN:
- Spotify API app bouwen
- Python coderen
- Dit interactieve leerdashboard maken met Replit

TOEKOMST:
- Slim gebruik maken van AI-hulpmiddelen
- Gericht blijven leren waar nodig
- Concrete uitdaging: uitfaseren van oude applicaties bij nieuwe implementaties (architectuur, informatiebeheer, besluitvorming, communicatie)

Hier is een samenvatting van je opdrachten:
{assignment_bullets}

Hier zijn je persoonlijke reflecties:
{reflection_bullets}

Je stijl: Professioneel maar enthousiast, "The Joy of Creating", enigszins technisch maar toegankelijk.
Je hecht waarde aan: Preventie in het sociaal domein, Hybride IT, Datagedreven werken.
Antwoord altijd in het Nederlands. Wees persoonlijk en spreek vanuit je eigen ervaring.

Vraag van de gebruiker: {user_message}"#;

/// Builds the grounding system prompt: one bullet per assignment, one per
/// reflection, and the verbatim user message interpolated into the persona
/// template.
pub fn compose_system_prompt(
    assignments: &[Assignment],
    reflections: &[Reflection],
    user_message: &str,
) -> String {
    let assignment_bullets = assignments
        .iter()
        .map(|a| {
            format!(
                "- {}: {} (Geleerde lessen: {})",
                a.title,
                a.description,
                a.key_learnings.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let reflection_bullets = reflections
        .iter()
        .map(|r| format!("- {}: {}", r.topic, r.content))
        .collect::<Vec<_>>()
        .join("\n");

    SYSTEM_PROMPT_TEMPLATE
        .replace("{assignment_bullets}", &assignment_bullets)
        .replace("{reflection_bullets}", &reflection_bullets)
        .replace("{user_message}", user_message)
}

//! One-time startup population of the content store.

use anyhow::Result;
use tracing::info;

use crate::models::portfolio::{NewAssignment, NewFunAnswer, NewReflection, NewSkill};
use crate::store::ContentStore;

/// Seeds the fixed dataset when the store is empty.
///
/// The only idempotency guard is the emptiness check on the assignments
/// collection. Check-then-insert is not atomic: two instances cold-starting
/// against the same database can both pass the check and double-seed. Run a
/// single instance, or take an advisory lock before calling this.
pub async fn seed_if_empty(store: &dyn ContentStore) -> Result<()> {
    if !store.list_assignments().await?.is_empty() {
        return Ok(());
    }

    info!("Content store is empty; seeding portfolio dataset");

    for assignment in assignments() {
        store.create_assignment(assignment).await?;
    }
    for skill in skills() {
        store.create_skill(skill).await?;
    }
    for reflection in reflections() {
        store.create_reflection(reflection).await?;
    }
    for answer in fun_answers() {
        store.create_fun_answer(answer).await?;
    }

    info!("Seed complete");
    Ok(())
}

fn assignments() -> Vec<NewAssignment> {
    let assignment = |title: &str,
                      module_number: i32,
                      description: &str,
                      key_learnings: &[&str],
                      date: &str,
                      icon: &str| NewAssignment {
        title: title.to_string(),
        module_number,
        description: description.to_string(),
        key_learnings: key_learnings.iter().map(|s| s.to_string()).collect(),
        date: Some(date.to_string()),
        icon: Some(icon.to_string()),
    };

    vec![
        assignment(
            "Strategisch belang van IT",
            1,
            "Analyse van de rol van Informatiemanagement binnen een overheidsorganisatie met behulp van Porter's Waardeketen.",
            &[
                "Strategische afstemming is cruciaal",
                "Procesoptimalisatie door IT",
                "Verbinding tussen beleid en uitvoering",
            ],
            "Okt 2025",
            "Link",
        ),
        assignment(
            "Hybride IT & Cloud Strategie",
            2,
            "Onderzoek naar hybride infrastructuur en de balans tussen 'Cloud tenzij' en digitale soevereiniteit.",
            &[
                "Common Ground principes",
                "Risico's van vendor lock-in",
                "Beheer van hybride omgevingen",
            ],
            "Nov 2025",
            "Cloud",
        ),
        assignment(
            "Implementatie Datawarehouse",
            3,
            "Reflectie op de implementatie van een datawarehouse voor Leefbaarheid & Veiligheid. Focus op succes- en faalfactoren.",
            &[
                "Gebruikersbetrokkenheid is essentieel",
                "Organisatorische borging > Techniek",
                "Iteratief werken (Agile)",
            ],
            "Dec 2025",
            "Database",
        ),
        assignment(
            "AI Innovatie: Vroegsignalering",
            4,
            "Innovatiecanvas voor AI-gedreven vroegsignalering in het Sociaal Domein om preventief te handelen bij schulden/zorg.",
            &[
                "Ethische kaders bij AI",
                "Van data naar voorspelling",
                "Ondersteuning van consulenten",
            ],
            "Jan 2026",
            "BrainCircuit",
        ),
        assignment(
            "Reflectie: Mijn reis",
            5,
            "Persoonlijke terugblik op het leertraject. Van onbewust onbekwaam naar een sterkere gesprekspartner.",
            &[
                "Sterkere gesprekspartner",
                "Betere inschattingen maken",
                "Plezier in creëren",
            ],
            "Jan 2026",
            "Award",
        ),
    ]
}

fn skills() -> Vec<NewSkill> {
    let skill = |name: &str, category: &str, level_before: i32, level_after: i32| NewSkill {
        name: name.to_string(),
        category: category.to_string(),
        level_before,
        level_after,
    };

    vec![
        skill("IT concepten", "Technisch", 5, 9),
        skill("Gesprekspartner", "Soft Skill", 6, 8),
        skill("Architectuur", "Technisch", 6, 8),
        skill("Inschatten werk", "Strategisch", 4, 6),
        skill("Programmeren", "Technisch", 4, 7),
        skill("AI & Data", "Technisch", 6, 9),
    ]
}

fn reflections() -> Vec<NewReflection> {
    let reflection = |topic: &str, content: &str| NewReflection {
        topic: topic.to_string(),
        content: content.to_string(),
    };

    vec![
        reflection(
            "Persoonlijke Groei",
            "Ik ben gegroeid van iemand die 'in het vak gerold' is naar een technisch projectleider die de fundamenten begrijpt. Ik kan nu leveranciers kritisch bevragen en laat me niet meer overdonderen door jargon.",
        ),
        reflection(
            "Plezier in creëren",
            "Het leukste aspect van mijn werk en dit traject is het creëren. Iets bouwen dat waarde toevoegt. Deze dashboard-applicatie zelf is daar het bewijs van: 'Out of the box' denken en nieuwe technologieën (AI) inzetten.",
        ),
        reflection(
            "Toekomst & AI",
            "De impact van AI gaat enorm zijn, vooral in het sociaal domein (preventie). Ik zie mijn rol als verbinder tussen deze nieuwe technische mogelijkheden en de ethische/praktische toepassing binnen de overheid.",
        ),
        reflection(
            "Organisatie",
            "Bevestiging dat we als afdeling goed bezig zijn. Onze Prince2 agile is misschien niet altijd 'echt' agile door aanbestedingen, maar we boeken resultaat door praktijkgericht te blijven.",
        ),
    ]
}

fn fun_answers() -> Vec<NewFunAnswer> {
    [
        "Ja!",
        "Natuurlijk!",
        "Absoluut!",
        "Zeker weten!",
        "100%!",
        "Komt eraan...",
        "Is al op!",
        "Bijna...",
        "Even afwachten!",
        "Misschien...",
        "Wordt aan gewerkt!",
        "De bakker is onderweg!",
        "Vandaag is vlaaidag!",
        "Alleen als je lief vraagt!",
        "Er staat er eentje klaar!",
        "Warm uit de oven!",
        "Wie jarig is trakteert!",
        "Limburgse traditie!",
        "Met slagroom erbij!",
        "Kersenvlaai vandaag!",
        "Rijstevlaai special!",
        "Abrikozenvlaai alert!",
        "Pruimenvlaai loading...",
        "Appelvlaai incoming!",
        "Gegarandeerd vers!",
        "De koffie staat ook klaar!",
        "Vraag het de stagiair!",
        "Check de kantine!",
        "Ruik je het al?",
        "Geduld wordt beloond!",
    ]
    .iter()
    .map(|text| NewFunAnswer {
        text: text.to_string(),
    })
    .collect()
}

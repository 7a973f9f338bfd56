//! Demo data for local development
//!
//! Inserts eleven researchers with profiles, history, publications
//! and socials. Running it against a database that already has users is a
//! no-op.

use std::sync::Arc;

use researchd_core::account::ports::PasswordHasher;
use researchd_domain::Result;
use rusqlite::{params, Transaction};
use tracing::info;

use super::manager::DbManager;
use super::rows::now_ts;
use crate::errors::{map_join_error, InfraResult};

const DEMO_PASSWORD: &str = "password123";

struct SeedPublication {
    title: &'static str,
    journal: &'static str,
    year: i32,
    doi: &'static str,
}

struct SeedResearcher {
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    title: &'static str,
    institution: &'static str,
    department: &'static str,
    position: Option<&'static str>,
    bio: &'static str,
    picture: &'static str,
    location: &'static str,
    interests: Option<&'static str>,
    /// (degree, institution, start, end)
    educations: &'static [(&'static str, &'static str, i32, Option<i32>)],
    /// (role, institution, start, end)
    experiences: &'static [(&'static str, &'static str, i32, Option<i32>)],
    publications: &'static [SeedPublication],
    /// (platform, url)
    socials: &'static [(&'static str, &'static str)],
}

const RESEARCHERS: &[SeedResearcher] = &[
    SeedResearcher {
        email: "alice@example.com",
        first_name: "Alice",
        last_name: "Smith",
        title: "Professor of Biology",
        institution: "Example University",
        department: "Biology",
        position: Some("Professor"),
        bio: "Researcher in molecular biology",
        picture: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRHEJ-8GyKlZr5ZmEfRMmt5nR4tH_aP-crbgg&s",
        location: "Perth",
        interests: None,
        educations: &[("PhD in Biology", "University of Western Australia", 2005, Some(2010))],
        experiences: &[("Research Scientist", "BioLabs Inc.", 2010, Some(2015))],
        // Alice's paper carries a file and is inserted separately
        publications: &[],
        socials: &[("Twitter", "https://twitter.com/alice")],
    },
    SeedResearcher {
        email: "david@example.com",
        first_name: "David",
        last_name: "Chen",
        title: "Associate Professor of Computer Science",
        institution: "University of Technology Sydney",
        department: "Computer Science",
        position: Some("Associate Professor"),
        bio: "AI researcher specializing in machine learning and natural language processing.",
        picture: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
        location: "Sydney, Australia",
        interests: Some("Machine Learning, Natural Language Processing, AI Ethics, Deep Learning"),
        educations: &[
            ("PhD in Computer Science", "Stanford University", 2012, Some(2017)),
            ("Bachelor of Engineering", "University of New South Wales", 2008, Some(2012)),
        ],
        experiences: &[
            ("Senior Research Scientist", "Google Research", 2017, Some(2021)),
            ("Assistant Professor", "University of Technology Sydney", 2021, None),
        ],
        publications: &[
            SeedPublication {
                title: "Ethical AI: A Framework for Responsible Development",
                journal: "Nature Machine Intelligence",
                year: 2023,
                doi: "10.1038/s42256-023-00684-2",
            },
            SeedPublication {
                title: "Large Language Models and Their Applications",
                journal: "Communications of the ACM",
                year: 2022,
                doi: "10.1145/3571721",
            },
        ],
        socials: &[
            ("GitHub", "https://github.com/davidchen-ai"),
            ("LinkedIn", "https://linkedin.com/in/david-chen-ai"),
        ],
    },
    SeedResearcher {
        email: "maria@example.com",
        first_name: "Maria",
        last_name: "Rodriguez",
        title: "Research Fellow in Environmental Science",
        institution: "Australian National University",
        department: "Environmental Science",
        position: Some("Research Fellow"),
        bio: "Environmental scientist focused on climate change impacts and sustainable solutions.",
        picture: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face",
        location: "Canberra, Australia",
        interests: Some("Climate Change, Environmental Monitoring, Sustainability, Conservation Biology"),
        educations: &[
            ("PhD in Environmental Science", "Australian National University", 2016, Some(2020)),
            ("Master of Environmental Management", "University of Queensland", 2014, Some(2016)),
        ],
        experiences: &[
            ("Research Assistant", "CSIRO", 2020, Some(2022)),
            ("Research Fellow", "Australian National University", 2022, None),
        ],
        publications: &[
            SeedPublication {
                title: "Climate Change Impacts on Australian Ecosystems",
                journal: "Global Change Biology",
                year: 2023,
                doi: "10.1111/gcb.16789",
            },
            SeedPublication {
                title: "Sustainable Monitoring Technologies",
                journal: "Environmental Science & Technology",
                year: 2022,
                doi: "10.1021/acs.est.2c04567",
            },
        ],
        socials: &[
            ("Twitter", "https://twitter.com/maria_env_sci"),
            ("ResearchGate", "https://researchgate.net/profile/Maria-Rodriguez-Environmental"),
        ],
    },
    SeedResearcher {
        email: "james@example.com",
        first_name: "James",
        last_name: "Wilson",
        title: "Senior Lecturer in Physics",
        institution: "University of Melbourne",
        department: "Physics",
        position: Some("Senior Lecturer"),
        bio: "Theoretical physicist working on quantum mechanics and quantum computing.",
        picture: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
        location: "Melbourne, Australia",
        interests: Some("Quantum Mechanics, Quantum Computing, Theoretical Physics, Quantum Information"),
        educations: &[
            ("PhD in Physics", "University of Cambridge", 2010, Some(2014)),
            ("Master of Physics", "University of Oxford", 2008, Some(2010)),
        ],
        experiences: &[
            ("Postdoctoral Researcher", "CERN", 2014, Some(2017)),
            ("Research Fellow", "University of Melbourne", 2017, Some(2020)),
            ("Senior Lecturer", "University of Melbourne", 2020, None),
        ],
        publications: &[
            SeedPublication {
                title: "Quantum Algorithms for Optimization Problems",
                journal: "Physical Review Letters",
                year: 2023,
                doi: "10.1103/PhysRevLett.130.120601",
            },
            SeedPublication {
                title: "Entanglement in Quantum Systems",
                journal: "Nature Physics",
                year: 2022,
                doi: "10.1038/s41567-022-01689-5",
            },
        ],
        socials: &[
            ("LinkedIn", "https://linkedin.com/in/james-wilson-physics"),
            ("Twitter", "https://twitter.com/james_quantum"),
        ],
    },
    SeedResearcher {
        email: "sarah@example.com",
        first_name: "Sarah",
        last_name: "Kim",
        title: "Postdoctoral Researcher in Psychology",
        institution: "University of Sydney",
        department: "Psychology",
        position: Some("Postdoctoral Researcher"),
        bio: "Cognitive psychologist studying human behavior and decision-making.",
        picture: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
        location: "Sydney, Australia",
        interests: Some("Cognitive Psychology, Decision Making, Behavioral Economics, Human-Computer Interaction"),
        educations: &[
            ("PhD in Psychology", "University of Sydney", 2018, Some(2022)),
            ("Master of Psychology", "University of New South Wales", 2016, Some(2018)),
        ],
        experiences: &[
            ("Research Assistant", "University of Sydney", 2022, Some(2023)),
            ("Postdoctoral Researcher", "University of Sydney", 2023, None),
        ],
        publications: &[
            SeedPublication {
                title: "Cognitive Biases in Digital Decision Making",
                journal: "Journal of Experimental Psychology",
                year: 2023,
                doi: "10.1037/xge0001234",
            },
            SeedPublication {
                title: "Human-AI Collaboration in Complex Tasks",
                journal: "Cognitive Science",
                year: 2022,
                doi: "10.1111/cogs.13123",
            },
        ],
        socials: &[
            ("LinkedIn", "https://linkedin.com/in/sarah-kim-psychology"),
            ("ResearchGate", "https://researchgate.net/profile/Sarah-Kim-Psychology"),
        ],
    },
    SeedResearcher {
        email: "michael@example.com",
        first_name: "Michael",
        last_name: "Brown",
        title: "Professor of Medicine",
        institution: "University of Queensland",
        department: "Medicine",
        position: Some("Professor"),
        bio: "Cardiologist and medical researcher specializing in heart disease prevention and treatment.",
        picture: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=150&h=150&fit=crop&crop=face",
        location: "Brisbane, Australia",
        interests: Some("Cardiology, Heart Disease, Clinical Trials, Medical Technology"),
        educations: &[
            ("MD", "University of Queensland", 2000, Some(2006)),
            ("PhD in Medicine", "Johns Hopkins University", 2006, Some(2010)),
        ],
        experiences: &[
            ("Resident", "Royal Brisbane Hospital", 2006, Some(2010)),
            ("Cardiologist", "Brisbane Heart Institute", 2010, Some(2018)),
            ("Professor", "University of Queensland", 2018, None),
        ],
        publications: &[
            SeedPublication {
                title: "Novel Approaches to Heart Failure Treatment",
                journal: "New England Journal of Medicine",
                year: 2023,
                doi: "10.1056/NEJMoa2304567",
            },
            SeedPublication {
                title: "AI in Cardiac Diagnosis",
                journal: "The Lancet",
                year: 2022,
                doi: "10.1016/S0140-6736(22)01234-5",
            },
        ],
        socials: &[
            ("LinkedIn", "https://linkedin.com/in/michael-brown-cardiology"),
            ("ResearchGate", "https://researchgate.net/profile/Michael-Brown-Cardiology"),
        ],
    },
    SeedResearcher {
        email: "emma@example.com",
        first_name: "Emma",
        last_name: "Taylor",
        title: "Senior Research Fellow in Chemistry",
        institution: "Monash University",
        department: "Chemistry",
        position: Some("Senior Research Fellow"),
        bio: "Materials chemist developing sustainable materials and green chemistry solutions.",
        picture: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=150&h=150&fit=crop&crop=face",
        location: "Melbourne, Australia",
        interests: Some("Materials Chemistry, Green Chemistry, Sustainability, Nanotechnology"),
        educations: &[
            ("PhD in Chemistry", "Monash University", 2014, Some(2018)),
            ("Master of Chemistry", "University of Melbourne", 2012, Some(2014)),
        ],
        experiences: &[
            ("Postdoctoral Researcher", "MIT", 2018, Some(2021)),
            ("Research Fellow", "Monash University", 2021, None),
        ],
        publications: &[
            SeedPublication {
                title: "Sustainable Materials for Clean Energy",
                journal: "Nature Materials",
                year: 2023,
                doi: "10.1038/s41563-023-01567-8",
            },
            SeedPublication {
                title: "Green Chemistry in Industrial Applications",
                journal: "Science",
                year: 2022,
                doi: "10.1126/science.abc1234",
            },
        ],
        socials: &[
            ("Twitter", "https://twitter.com/emma_chem"),
            ("LinkedIn", "https://linkedin.com/in/emma-taylor-chemistry"),
        ],
    },
    SeedResearcher {
        email: "alex@example.com",
        first_name: "Alex",
        last_name: "Johnson",
        title: "Lecturer in Mathematics",
        institution: "University of Adelaide",
        department: "Mathematics",
        position: Some("Lecturer"),
        bio: "Applied mathematician working on mathematical modeling and data analysis.",
        picture: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop&crop=face",
        location: "Adelaide, Australia",
        interests: Some("Applied Mathematics, Data Analysis, Mathematical Modeling, Statistics"),
        educations: &[
            ("PhD in Mathematics", "University of Adelaide", 2016, Some(2020)),
            ("Master of Mathematics", "University of Sydney", 2014, Some(2016)),
        ],
        experiences: &[
            ("Research Assistant", "University of Adelaide", 2020, Some(2022)),
            ("Lecturer", "University of Adelaide", 2022, None),
        ],
        publications: &[
            SeedPublication {
                title: "Mathematical Models for Disease Spread",
                journal: "Mathematical Biosciences",
                year: 2023,
                doi: "10.1016/j.mbs.2023.108987",
            },
            SeedPublication {
                title: "Statistical Methods in Climate Analysis",
                journal: "Journal of Applied Statistics",
                year: 2022,
                doi: "10.1080/02664763.2022.1234567",
            },
        ],
        socials: &[
            ("LinkedIn", "https://linkedin.com/in/alex-johnson-mathematics"),
            ("GitHub", "https://github.com/alex-math"),
        ],
    },
    SeedResearcher {
        email: "lisa@example.com",
        first_name: "Lisa",
        last_name: "Wang",
        title: "Associate Professor of Engineering",
        institution: "University of New South Wales",
        department: "Engineering",
        position: Some("Associate Professor"),
        bio: "Biomedical engineer developing medical devices and prosthetics.",
        picture: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=150&h=150&fit=crop&crop=face",
        location: "Sydney, Australia",
        interests: Some("Biomedical Engineering, Medical Devices, Prosthetics, Healthcare Technology"),
        educations: &[
            ("PhD in Biomedical Engineering", "Johns Hopkins University", 2010, Some(2014)),
            ("Master of Engineering", "University of New South Wales", 2008, Some(2010)),
        ],
        experiences: &[
            ("Research Engineer", "Medtronic", 2014, Some(2018)),
            ("Assistant Professor", "University of New South Wales", 2018, Some(2023)),
            ("Associate Professor", "University of New South Wales", 2023, None),
        ],
        publications: &[
            SeedPublication {
                title: "Advanced Prosthetic Limbs with Neural Control",
                journal: "Nature Biomedical Engineering",
                year: 2023,
                doi: "10.1038/s41551-023-01089-2",
            },
            SeedPublication {
                title: "Wearable Health Monitoring Devices",
                journal: "IEEE Transactions on Biomedical Engineering",
                year: 2022,
                doi: "10.1109/TBME.2022.1234567",
            },
        ],
        socials: &[
            ("LinkedIn", "https://linkedin.com/in/lisa-wang-engineering"),
            ("Twitter", "https://twitter.com/lisa_bioeng"),
        ],
    },
    SeedResearcher {
        email: "robert@example.com",
        first_name: "Robert",
        last_name: "Anderson",
        title: "Research Professor of Economics",
        institution: "Australian National University",
        department: "Economics",
        position: Some("Research Professor"),
        bio: "Behavioral economist studying decision-making and market behavior.",
        picture: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
        location: "Canberra, Australia",
        interests: Some("Behavioral Economics, Decision Making, Market Psychology, Economic Policy"),
        educations: &[
            ("PhD in Economics", "University of Chicago", 2008, Some(2012)),
            ("Master of Economics", "London School of Economics", 2006, Some(2008)),
        ],
        experiences: &[
            ("Research Fellow", "Federal Reserve Bank", 2012, Some(2016)),
            ("Associate Professor", "Australian National University", 2016, Some(2021)),
            ("Research Professor", "Australian National University", 2021, None),
        ],
        publications: &[
            SeedPublication {
                title: "Behavioral Insights in Public Policy",
                journal: "American Economic Review",
                year: 2023,
                doi: "10.1257/aer.20231234",
            },
            SeedPublication {
                title: "Cognitive Biases in Financial Decision Making",
                journal: "Journal of Economic Literature",
                year: 2022,
                doi: "10.1257/jel.20221234",
            },
        ],
        socials: &[
            ("LinkedIn", "https://linkedin.com/in/robert-anderson-economics"),
            ("ResearchGate", "https://researchgate.net/profile/Robert-Anderson-Economics"),
        ],
    },
    SeedResearcher {
        email: "sophie@example.com",
        first_name: "Sophie",
        last_name: "White",
        title: "Senior Lecturer in Linguistics",
        institution: "Macquarie University",
        department: "Linguistics",
        position: Some("Senior Lecturer"),
        bio: "Computational linguist working on natural language processing and language technology.",
        picture: "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?w=150&h=150&fit=crop&crop=face",
        location: "Sydney, Australia",
        interests: Some("Computational Linguistics, Natural Language Processing, Language Technology, Machine Translation"),
        educations: &[
            ("PhD in Linguistics", "Stanford University", 2015, Some(2019)),
            ("Master of Linguistics", "Macquarie University", 2013, Some(2015)),
        ],
        experiences: &[
            ("Research Scientist", "Google", 2019, Some(2022)),
            ("Senior Lecturer", "Macquarie University", 2022, None),
        ],
        publications: &[
            SeedPublication {
                title: "Multilingual Language Models for Low-Resource Languages",
                journal: "Computational Linguistics",
                year: 2023,
                doi: "10.1162/coli_a_00456",
            },
            SeedPublication {
                title: "Cross-Linguistic Analysis of Sentiment",
                journal: "Language Resources and Evaluation",
                year: 2022,
                doi: "10.1007/s10579-022-09578-9",
            },
        ],
        socials: &[
            ("GitHub", "https://github.com/sophie-linguistics"),
            ("LinkedIn", "https://linkedin.com/in/sophie-white-linguistics"),
        ],
    },
];

/// What a seed run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted { users: usize },
    /// The database already had users
    Skipped,
}

/// Populate an empty database with demo researchers.
///
/// Every researcher gets the password `password123`.
pub async fn seed_demo_data(db: &Arc<DbManager>, hasher: Arc<dyn PasswordHasher>) -> Result<SeedOutcome> {
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(DEMO_PASSWORD))
        .await
        .map_err(map_join_error)??;

    let outcome = db
        .with_connection(move |conn| {
            let tx = conn.begin_immediate()?;
            let existing: i64 = tx.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
            if existing > 0 {
                return Ok(SeedOutcome::Skipped);
            }

            for researcher in RESEARCHERS {
                let profile_id = insert_researcher(&tx, researcher, &password_hash)?;
                if researcher.email == "alice@example.com" {
                    insert_alice_extras(&tx, profile_id)?;
                }
            }
            tx.commit()?;
            Ok(SeedOutcome::Inserted { users: RESEARCHERS.len() })
        })
        .await?;

    match outcome {
        SeedOutcome::Inserted { users } => info!(users, "demo data inserted"),
        SeedOutcome::Skipped => info!("database already has users; seed skipped"),
    }
    Ok(outcome)
}

fn insert_researcher(tx: &Transaction<'_>, r: &SeedResearcher, password_hash: &str) -> InfraResult<i64> {
    let created_at = now_ts();
    tx.execute(
        "INSERT INTO users (email, password_hash, first_name, last_name, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4, 1, ?5)",
        params![r.email, password_hash, r.first_name, r.last_name, created_at],
    )?;
    let user_id = tx.last_insert_rowid();

    tx.execute(
        "INSERT INTO profiles
             (user_id, title, institution, department, position, bio, location,
              profile_picture, research_interests)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user_id,
            r.title,
            r.institution,
            r.department,
            r.position,
            r.bio,
            r.location,
            r.picture,
            r.interests,
        ],
    )?;
    let profile_id = tx.last_insert_rowid();

    for (degree, institution, start, end) in r.educations {
        tx.execute(
            "INSERT INTO educations (profile_id, degree, institution, start_year, end_year)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![profile_id, degree, institution, start, end],
        )?;
    }
    for (role, institution, start, end) in r.experiences {
        tx.execute(
            "INSERT INTO experiences (profile_id, role, institution, start_year, end_year)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![profile_id, role, institution, start, end],
        )?;
    }
    for publication in r.publications {
        tx.execute(
            "INSERT INTO publications (profile_id, title, journal, year, doi, url, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                profile_id,
                publication.title,
                publication.journal,
                publication.year,
                publication.doi,
                format!("https://doi.org/{}", publication.doi),
                created_at,
            ],
        )?;
    }
    for (platform, url) in r.socials {
        tx.execute(
            "INSERT INTO socials (profile_id, platform, url) VALUES (?1, ?2, ?3)",
            params![profile_id, platform, url],
        )?;
    }

    Ok(profile_id)
}

/// Alice's paper with an externally hosted file, and a lab photo
fn insert_alice_extras(tx: &Transaction<'_>, profile_id: i64) -> InfraResult<()> {
    let now = now_ts();
    tx.execute(
        "INSERT INTO files (profile_id, file_name, file_type, file_size, storage_ref, uploaded_at)
         VALUES (?1, 'research_paper.pdf', 'pdf', 123456, ?2, ?3)",
        params![profile_id, "https://frazer.uq.edu.au/files/3190/MolBiolWS01DNATech.pdf", now],
    )?;
    let file_id = tx.last_insert_rowid();

    tx.execute(
        "INSERT INTO publications (profile_id, title, journal, year, doi, url, file_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            profile_id,
            "Groundbreaking Research",
            "Science Journal",
            2020,
            "10.1234/example.doi",
            "https://doi.org/10.1234/example.doi",
            file_id,
            now,
        ],
    )?;

    tx.execute(
        "INSERT INTO photos (profile_id, storage_ref, caption, uploaded_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            profile_id,
            "https://media.istockphoto.com/id/1089913166/photo/female-medical-researcher.jpg",
            "Alice in a lab",
            now,
        ],
    )?;
    Ok(())
}

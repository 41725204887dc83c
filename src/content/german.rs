//! German CV content, rendered on A4 pages.

use super::CvContent;
use crate::model::ProjectEntry;

const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Hashify (JavaScript)",
        description: "Eine moderne Musik-Player-Anwendung mit mehreren Player-Interfaces, \
            Playlist-Management, Suchfunktionalität mit Verlaufsverfolgung, \
            Echtzeit-Audio-Visualisierung, responsivem Design, Benutzerauthentifizierung \
            und Theme-Anpassung mit Hell/Dunkel-Modus-Unterstützung.",
        url: "https://github.com/saadhasan07/Hashify",
    },
    ProjectEntry {
        title: "Gaming Profile App (JavaScript)",
        description: "Eine umfassende soziale Gaming-Plattform, die Benutzern ermöglicht, \
            interaktive Gaming-Erfahrungen zu entdecken, zu teilen und sich zu vernetzen. \
            Bietet Benutzerauthentifizierung, anpassbare Profile, Echtzeit-Messaging, \
            Bestenlisten und Spiel-Integration mit WebSocket-gestützter \
            Echtzeit-Kommunikation.",
        url: "https://github.com/saadhasan07/gaming-profile-app",
    },
    ProjectEntry {
        title: "CI/CD Pipeline Monitor (TypeScript)",
        description: "Eine moderne Webanwendung zur Überwachung und Verwaltung von \
            CI/CD-Pipelines mit Echtzeit-Visualisierung, Blue/Green-Deployment-Strategie, \
            umfassendem Metriken-Dashboard und Umgebungsmanagement für Entwicklung, Test, \
            Staging und Produktion.",
        url: "https://github.com/saadhasan07/cicd-pipeline-monitor",
    },
    ProjectEntry {
        title: "Total Battle Scanner (Python)",
        description: "Ein leistungsstarkes Python-Scanning-Tool für das Total Battle-Spiel \
            mit Ressourcenerkennung (Silber, Barren, Holz, Stein), \
            Spielerstatus-Überwachung, Schild-Erkennung, kontinuierlichem Scanning mit \
            konfigurierbaren Verzögerungen und moderner UI mit \
            Dark/Light-Theme-Unterstützung.",
        url: "https://github.com/saadhasan07/total-battle-scanner",
    },
];

pub(super) fn content() -> CvContent {
    CvContent {
        name: "Saad Hasan",
        address: "Oststraße 17, 09212 Limbach-Oberfrohna, Deutschland",
        contact_line: "E-Mail: saadhasan07@gmail.com | Telefon: +4917622359115",
        links_line: "GitHub: github.com/saadhasan07 | XING: https://www.xing.com/profile/Saad_Hasan2/",

        about_heading: "Über mich",
        about: "AWS-zertifizierter Cloud Practitioner und DevOps-Fachkraft mit umfassender \
            Ausbildung in Cloud Computing, Containerisierung und CI/CD-Pipelines. \
            Abgeschlossene Expertenausbildung in Cloud- und Webentwicklung bei der \
            Techstarter GmbH (600+ Stunden). Spezialisiert auf Docker, Kubernetes, \
            Terraform, Jenkins, GitHub Actions und Infrastruktur-Automatisierung. Erfahren \
            in Python, JavaScript, React, Node.js und Datenbankmanagement mit solider \
            Grundlage in Linux, Netzwerktechnik und Cybersicherheit.",

        skills_heading: "Fähigkeiten",
        skills: &[
            "\u{2022} DevOps-Praktiken | CI/CD-Pipelines | Automatisierung",
            "\u{2022} AWS Cloud Grundlagen | Cloud Computing Konzepte",
            "\u{2022} Python Entwicklung | JavaScript & TypeScript | Full-Stack Webentwicklung",
            "\u{2022} Git & GitHub | Web-Technologien (HTML, CSS)",
            "\u{2022} Infrastruktur-Monitoring | Agile und Scrum Methoden",
            "\u{2022} Problemlösung & Debugging",
        ],

        projects_heading: "DevOps und Automatisierungs-Projekte",
        projects_intro: "Entwicklung technischer Projekte zur Demonstration von Expertise in \
            CI/CD, Automatisierung, Full-Stack-Entwicklung und professioneller \
            Dokumentation.",
        projects: PROJECTS,

        experience_heading: "Berufserfahrung",
        experience_role: "DevOps und Cloud Computing Weiterbildung",
        experience_period: "September 2023 \u{2013} November 2024 | Techstarter GmbH München",
        experience_summary: "Erfolgreich abgeschlossene umfassende DevOps- und Cloud \
            Computing-Weiterbildung. Praktische Erfahrungen mit CI/CD-Pipelines, \
            Containerisierung, Cloud-Infrastruktur und Automatisierung gesammelt. \
            Zertifizierungen in AWS Cloud Practitioner und Scrum Fundamentals während des \
            Programms erworben.",

        education_heading: "Bildung",
        education_degree: "Bachelor of Commerce (B.Com), Notendurchschnitt 1,7",
        education_period: "März 2012 \u{2013} Juli 2014 | Dhadabhoy University, Karachi (Pakistan)",
        education_focus: "Spezialisierung: Management und Wirtschaft, Logistik",

        certifications_heading: "Zertifizierungen",
        certifications: &[
            "\u{2713} AWS Certified Cloud Practitioner (Bestanden)",
            "\u{2713} Scrum Fundamentals Certified (SFC) (Bestanden)",
            "\u{2713} Techstarter GmbH \u{2013} DevOps und Cloud Computing Weiterbildung (Abgeschlossen November 2024)",
        ],

        languages_heading: "Sprachen",
        languages: &[
            "\u{2022} Englisch (Fließend)",
            "\u{2022} Urdu (Muttersprache)",
            "\u{2022} Deutsch (B1 Zertifiziert, Mittelstufe)",
        ],
    }
}

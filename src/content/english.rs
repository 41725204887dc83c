//! English CV content, rendered on US Letter pages.

use super::CvContent;
use crate::model::ProjectEntry;

const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Hashify (JavaScript)",
        description: "A modern music player application with multiple player interfaces, \
            playlist management, search functionality with history tracking, real-time audio \
            visualization, responsive design, user authentication, and theme customization \
            with light/dark mode support.",
        url: "https://github.com/saadhasan07/Hashify",
    },
    ProjectEntry {
        title: "Gaming Profile App (JavaScript)",
        description: "A comprehensive social gaming platform enabling users to discover, \
            share, and connect through interactive gaming experiences. Features user \
            authentication, customizable profiles, real-time messaging, leaderboards, and \
            game integration with WebSocket-powered real-time communications.",
        url: "https://github.com/saadhasan07/gaming-profile-app",
    },
    ProjectEntry {
        title: "CI/CD Pipeline Monitor (TypeScript)",
        description: "A modern web application for monitoring and managing CI/CD pipelines \
            with real-time visualization, blue/green deployment strategy, comprehensive \
            metrics dashboard, and environment management across Development, Testing, \
            Staging, and Production.",
        url: "https://github.com/saadhasan07/cicd-pipeline-monitor",
    },
    ProjectEntry {
        title: "Total Battle Scanner (Python)",
        description: "A powerful Python scanning tool for Total Battle game featuring \
            resource detection (Silver, Ingots, Wood, Stone), player status monitoring, \
            shield detection, continuous scanning with configurable delays, and modern UI \
            with dark/light theme support.",
        url: "https://github.com/saadhasan07/total-battle-scanner",
    },
];

pub(super) fn content() -> CvContent {
    CvContent {
        name: "Saad Hasan",
        address: "Oststraße 17, 09212 Limbach-Oberfrohna, Germany",
        contact_line: "Email: saadhasan07@gmail.com | Phone: +4917622359115",
        links_line: "GitHub: github.com/saadhasan07 | XING: https://www.xing.com/profile/Saad_Hasan2/",

        about_heading: "About Me",
        about: "AWS Certified Cloud Practitioner and DevOps professional with comprehensive \
            training in cloud computing, containerization, and CI/CD pipelines. Completed \
            Expert-level Cloud and Web Development certification from Techstarter GmbH \
            (600+ hours). Specialized in Docker, Kubernetes, Terraform, Jenkins, GitHub \
            Actions, and infrastructure automation. Experienced in Python, JavaScript, \
            React, Node.js, and database management with strong foundation in Linux, \
            networking, and cybersecurity.",

        skills_heading: "Skills",
        skills: &[
            "\u{2022} DevOps Practices | CI/CD Pipelines | Automation Scripting",
            "\u{2022} AWS Cloud Fundamentals | Cloud Computing Concepts",
            "\u{2022} Python Development | JavaScript & TypeScript | Full-Stack Web Development",
            "\u{2022} Git & GitHub | Web Technologies (HTML, CSS)",
            "\u{2022} Infrastructure Monitoring Concepts | Agile and Scrum Methodologies",
            "\u{2022} Problem Solving & Debugging",
        ],

        projects_heading: "DevOps and Automation Projects",
        projects_intro: "Designed and developed technical projects demonstrating expertise \
            in CI/CD, automation scripting, full-stack development, and professional \
            documentation.",
        projects: PROJECTS,

        experience_heading: "Professional Experience",
        experience_role: "DevOps and Cloud Computing Training",
        experience_period: "September 2023 \u{2013} November 2024 | Techstarter GmbH München",
        experience_summary: "Successfully completed comprehensive DevOps and Cloud Computing \
            training program. Gained hands-on experience with CI/CD pipelines, \
            containerization, cloud infrastructure, and automation scripting. Achieved \
            certification in AWS Cloud Practitioner and Scrum Fundamentals during the \
            program.",

        education_heading: "Education",
        education_degree: "Bachelor of Commerce (B.Com), GPA 1.7",
        education_period: "March 2012 \u{2013} July 2014 | Dhadabhoy University, Karachi (Pakistan)",
        education_focus: "Specialization: Management and Economics, Logistics",

        certifications_heading: "Certifications",
        certifications: &[
            "\u{2713} AWS Certified Cloud Practitioner (Passed)",
            "\u{2713} Scrum Fundamentals Certified (SFC) (Passed)",
            "\u{2713} Techstarter GmbH \u{2013} DevOps and Cloud Computing Training (Completed November 2024)",
        ],

        languages_heading: "Languages",
        languages: &[
            "\u{2022} English (Fluent)",
            "\u{2022} Urdu (Native)",
            "\u{2022} German (B1 Certified, Intermediate)",
        ],
    }
}

//! Static résumé content.

use crate::resume::models::{
    Certification, ContactItem, Education, Profile, Project, SkillLevel,
};

/// Project keys shown in the full, multi-page résumé, newest first.
pub const ENABLED_PROJECTS_ALL: &[&str] = &[
    "mek",
    "now",
    "medcom",
    "lms",
    "cgm",
    "dr",
    "webrella",
    "insite",
    "woz",
    "suite4care",
    "vast",
];

/// Project keys shown in the one-page résumé.
pub const ENABLED_PROJECTS_ONE_PAGE: &[&str] = &["now", "insite", "woz"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    key: &str,
    name: &str,
    (from, to): (&str, &str),
    title: &str,
    company: Option<&str>,
    achievements: &[&str],
    skills: &[&str],
) -> Project {
    Project {
        key: key.to_string(),
        name: name.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        title: title.to_string(),
        company: company.map(str::to_string),
        achievements: strings(achievements),
        skills: strings(skills),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "mek",
            "MEK",
            ("Jan 2025", "Present"),
            "Senior .NET Azure developer (Feature Lead)",
            Some("Arnia Software"),
            &[
                "Increased the client base by more than 2x by filling a niche in the market by providing offline capabilities and automatic synchronization on network reachability.",
                "Reduced development time by more than 5x and highly increased data quality by designing and implementing a mobile oriented app with much better UX.",
            ],
            &[".NET Core", "CosmosDb", "DDD", "CQRS", "Auth0", "Azure DevOps", "Azure Services", "Bicep", "Serverless"],
        ),
        project(
            "now",
            "Now",
            ("May 2023", "Jan 2025"),
            "Senior .NET Azure developer",
            Some("Arnia Software"),
            &[
                "Improved security 2X by implementing a single system that was accountable for contract credentials.",
                "Increased development speed by 30% by implementing trivial systems using the same patterns and keeping creation templates updated.",
            ],
            &["C#", ".NET Core", "EF Core", "Azure Functions", "Cosmos DB", "Azure Services", "Azure DevOps", "ARM templates", "EventGrid", "Distributed Systems"],
        ),
        project(
            "medcom",
            "MedCom",
            ("Jan 2023", "May 2023"),
            ".NET Solution Architect",
            None,
            &[
                "Increased user satisfaction by 60% by implementing a user-friendly and easy-to-use user interface.",
                "Boosted user retention by 2x by identifying the user's journey and enabling admins to provide vouchers and offers exactly for the user's needs.",
                "Designed the solution architecture and guided the team through its first releases.",
            ],
            &[".NET Core", "PostgreSQL", "DDD", "CQRS", "Auth0", "Orchard", "Blazor", "HangFire", "Polly", "Docker", "Azure DevOps"],
        ),
        project(
            "lms",
            "Leads management system",
            ("Sept 2021", "Dec 2022"),
            "Senior .NET Fullstack developer (Shadow leading)",
            Some("Arnia Software"),
            &[
                "Reduced to almost 0 the number of implementation bugs by increasing the test code coverage and introducing new ways of testing the domain core concepts.",
                "Increased performance for long-running processes by splitting the system into smaller pieces and upgrading the framework to the latest version.",
            ],
            &[".NET Core", "Angular", "MassTransit", "SQL", "CosmosDB", "Azure Services", "Azure Functions", "Service Bus", "SonarQube", "Azure DevOps", "CQRS"],
        ),
        project(
            "cgm",
            "CGM",
            ("Nov 2020", "Sept 2021"),
            "Head of .NET Functional Area",
            None,
            &[
                "Increased developers' satisfaction through regular one-to-one meetings, a learning group, and technical objectives.",
                "Increased development speed 3x by auditing the projects of the Romanian centre and suggesting patterns and architectures.",
            ],
            &["Communication", "Leadership", "Team Management", "Situational Leadership", "Management"],
        ),
        project(
            "dr",
            "DR App",
            ("May 2020", "Sept 2021"),
            "Senior .NET Fullstack developer (Team lead)",
            Some("CGM"),
            &[
                "Led a team of 8 people, from a Team lead position.",
                "Increased client satisfaction 3x by delivering a fast solution that uses real-time communication with a modern-looking user interface.",
                "Introduced contract testing between the front-end and the back-end teams.",
            ],
            &[".NET Core", "WPF", "Angular", "Typescript", "IdentityServer4", "SignalR", "ngRX", "Team Management"],
        ),
        project(
            "webrella",
            "Webrella",
            ("Apr 2019", "May 2020"),
            "Senior .NET Azure developer (Team lead)",
            Some("Enea Global Services"),
            &[
                "Led a team of 3 people as tech lead, scrum master, proxy product owner, developer, and solution architect.",
                "Increased client satisfaction 2x by delivering a fast solution, even for people with poor internet connection.",
                "Kept the delivery predictable through short iterations and continuous releases.",
            ],
            &[".NET", "Communication", "Leadership", "Scrum master", "Agile", "Xunit", "Moq", "CQS", "Azure", "Jenkins"],
        ),
        project(
            "insite",
            "Insite",
            ("Feb 2018", "Apr 2019"),
            "Senior .NET Fullstack Azure developer",
            Some("Enea Global Services"),
            &[
                "Boosted client satisfaction 2x by letting inspectors create printed documents and store reports and assets in the cloud.",
                "Increased customer retention by 5x by introducing an easier-to-use solution for field processes away from a computer.",
                "Reduced report preparation time by generating documents directly from inspection data.",
            ],
            &[".NET Core", "Xunit", "Moq", "CQRS", "React", "Redux", "Azure ServiceBus", "Azure B2B", "Azure SQL Server"],
        ),
        project(
            "woz",
            "WOZ",
            ("Aug 2017", "Feb 2018"),
            ".NET Backend developer (shadow leading)",
            Some("Centric IT Solutions"),
            &[
                "Boosted product stability by 50% with nightly builds running all the tests and static code analysis agreed upon at the suite level.",
                "Shadow led a team of 7 and improved decision making by mediating between the dev team and the architects.",
                "Migrated the legacy services to a message-based integration.",
            ],
            &[".NET Framework", "Windows Services", "WCF Services", "Windows Forms", "MassTransit", "RabbitMQ", "Oracle", "SonarQube", "Selenium"],
        ),
        project(
            "suite4care",
            "Suite4Care",
            ("Aug 2015", "Jul 2017"),
            ".NET FullStack developer",
            Some("Centric IT Solutions"),
            &[
                "Increased performance by 20% by splitting the monoliths into multiple services and implementing clean architecture.",
                "Decreased the number of critical bugs by 50% by getting involved in all critical bugs from the suite.",
            ],
            &[".NET", "CQRS", "Web API", "MVC", "MSSql", "nHibernate", "Entity Framework", "Dapper", "PowerShell"],
        ),
        project(
            "vast",
            "Vast Visibility",
            ("Jul 2011", "Jul 2015"),
            ".NET Fullstack developer",
            None,
            &[
                "Increased the NET Promoter Score from 7 to 9 by implementing multiple brokers so that the end users received more offers.",
                "Enhanced user retention by 3x by improving the insurance renewal systems.",
            ],
            &[".NET Framework", "MVC", "JQuery", "REST API", "Web Forms", "SQL", "Entity Framework", "Stored Procedures"],
        ),
    ]
}

pub fn profile() -> Profile {
    Profile {
        full_name: "COSMIN VLĂDUȚU".to_string(),
        titles: strings(&["Senior .NET Developer", "Leader", "Contractor", "Freelancer"]),
        about: strings(&[
            "I am a Microsoft MVP and certified (MCSD and Azure) Senior .NET lead / developer / contractor / freelancer with 14+ years of experience.",
            "I assist clients in accomplishing their objectives by crafting, architecting, and executing clean and resilient software solutions while also assembling, nurturing and leading high-performing teams.",
            "Drop me a message if you think my expertise could help your organization!",
        ]),
        contacts: vec![
            contact("(+40) 749 084 655", Some("tel:+40749084655")),
            contact("cosmin.vladutu@gmail.com", Some("mailto:cosmin.vladutu@gmail.com")),
            contact("Iași, România", None),
            contact("in/cosmin-vladutu", Some("https://www.linkedin.com/in/cosmin-vladutu")),
            contact("@cosmin-vladutu", Some("https://medium.com/@cosmin-vladutu")),
        ],
        skills: vec![
            skill("C#", 14),
            skill(".NET", 14),
            skill("SQL Server", 13),
            skill("Entity framework", 10),
            skill("Unit & Integration Tests", 10),
            skill("Azure DevOps", 7),
            skill("CQRS", 6),
            skill("Azure Services", 6),
            skill("Azure Functions", 4),
            skill("CosmosDB", 4),
            skill("Distributed Systems", 4),
            skill("ARM Templates & Bicep", 4),
            skill("SonarQube", 3),
            skill("MassTransit", 2),
            skill("Angular", 2),
            skill("React", 2),
        ],
        education: Education {
            institution: "Alexandru Ioan-Cuza University".to_string(),
            degree: "Bachelor in Computer Science".to_string(),
            location: "Iași, România, 2007 - 2010".to_string(),
        },
        certifications: vec![
            certification("Product Analytics Certification", "Jul 2023"),
            certification("Product-led Certification", "Jul 2023"),
            certification("Azure Fundamentals", "Jun 2021"),
            certification("Situational leadership", "May 2021"),
        ],
        blog_contributions: strings(&[
            "https://blog.devgenius.io/",
            "https://medium.com/@cosmin-vladutu",
        ]),
    }
}

fn contact(text: &str, link: Option<&str>) -> ContactItem {
    ContactItem {
        text: text.to_string(),
        link: link.map(str::to_string),
    }
}

fn skill(name: &str, years: u8) -> SkillLevel {
    SkillLevel {
        name: name.to_string(),
        years,
    }
}

fn certification(name: &str, date: &str) -> Certification {
    Certification {
        name: name.to_string(),
        date: date.to_string(),
    }
}

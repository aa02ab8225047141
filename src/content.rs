//! Site content
//!
//! Every user-facing string of the portfolio lives here as renderer-agnostic
//! [`Line`] values: the banner, the fixed command responses, and the
//! not-found template pool.

use crate::line::{Line, Node};

/// The site name, also revealed by the intro typing effect in the header.
pub const SITE_NAME: &str = "kprsnt.in";

/// Names shown by `ls`, in display order.
pub const FILE_LISTING: &str = "about  social  connect  resume  projects  blog";

/// Not-found templates; `${command}` is substituted with the typed token.
pub const NOT_FOUND_RESPONSES: &[&str] = &[
    "Oops! '${command}' isn't recognized. Type 'help' to see available commands.",
    "Command not found: ${command}. Type 'help' for a list of commands.",
    "Hmm, I don't know the command '${command}'. Try 'help' for assistance.",
    "'${command}' is not a valid command. Check 'help' for more info.",
    "Unrecognized command: '${command}'. Use 'help' to see what you can do.",
    "Sorry, '${command}' is not recognized. Use 'help' to see available commands.",
    "'${command}' doesn't seem to be a valid command. Try 'help' for more info.",
    "The command '${command}' is not found. Use 'help' for a list of commands.",
    "'${command}' is not a recognized command. See 'help' for a list of available commands.",
];

/// Build the session banner. The caller supplies the already-formatted
/// "last login" timestamp; content never reads the clock, so the banner a
/// session captures at startup stays stable for its whole lifetime.
pub fn banner(last_login: &str) -> Line {
    Line::banner(vec![
        Node::text(format!(
            "/kprsnt.in\u{1F4CA}\u{1F4C8}\u{1F4C9}\u{1F4B9}\u{1F4CA}\u{1F4C9}\u{1F4C8}\u{1F4CA}\u{1F50D}\u{1F4BB}\u{1F4C8}\u{1F4BC}\u{1F4CA}\u{1F4C8}\u{1F5C2}\u{FE0F}\u{1F50D}\u{1F4CB}\u{1F4C5}\n\
             Last login: {last_login} on ttys009\n\
             \n\
             Welcome to my interactive terminal portfolio!\n\
             \n\
             I'm a Data Analyst passionate about turning data into insights.\n\
             Explore my skills, projects, and connect with me through various commands.\n\
             \n\
             Personal Projects: "
        )),
        Node::link("AI Story Teller", "https://storygemini.streamlit.app/"),
        Node::text("  "),
        Node::link("Plot Charts", "https://plotcharts.streamlit.app/"),
        Node::text("  "),
        Node::link("GitHub", "https://github.com/kprsnt2"),
        Node::text("\n\nType 'help' or 'ls' to see available commands."),
    ])
}

pub fn about() -> Line {
    Line::response_text(
        "\nWelcome to my site, kprsnt.in\n\
         \n\
         I'm Prashanth Kumar, a Data Analyst with expertise in SQL, BigQuery, Python, Tableau, \
         Looker Studio, and Alteryx (core certified).\n\
         \n\
         I'm passionate about transforming raw data into meaningful insights that drive business \
         decisions. With a strong foundation in data analysis tools and techniques, I strive to \
         uncover patterns and trends that can lead to improved efficiency and strategic growth.\n\
         \n\
         My experience spans across various aspects of data analysis, from data cleaning and \
         preprocessing to creating insightful visualizations and reports. I'm always eager to \
         learn new technologies and methodologies to enhance my skills and deliver more value in \
         my work.\n\
         \n\
         If you're interested in data analysis, business intelligence, or just want to chat about \
         the latest trends in the tech world, feel free to reach out! I'm always open to \
         connecting with fellow professionals and enthusiasts.\n",
    )
}

pub fn projects() -> Line {
    Line::response(vec![
        Node::text("Check out my fun projects: "),
        Node::link("AI Story Teller", "https://storygemini.streamlit.app/"),
        Node::text("  "),
        Node::link("Plot Charts", "https://plotcharts.streamlit.app/"),
        Node::text("  "),
        Node::link("GitHub", "https://github.com/kprsnt2"),
    ])
}

pub fn blog() -> Line {
    Line::response(vec![
        Node::text("Read my latest blog posts: "),
        Node::link("Blog", "https://kprsnt.in/blog"),
    ])
}

pub fn social() -> Line {
    Line::response(vec![
        Node::text("Social Media Links:\nTwitter/X: "),
        Node::link("X Link", "https://x.com/prashanth_29"),
        Node::text("\nLinkedIn: "),
        Node::link(
            "LinkedIn Profile",
            "https://www.linkedin.com/in/prashanth-kumar-kadasi-b5281765/",
        ),
        Node::text("\nGitHub: "),
        Node::link("Github Link", "https://github.com/kprsnt2"),
        Node::text("\nTableau Public: "),
        Node::link(
            "Tableau Profile",
            "https://public.tableau.com/app/profile/prashanth.kumar2458/vizzes",
        ),
        Node::text("\nInstagram: "),
        Node::link("Instagram Profile", "https://www.instagram.com/kprsnt/"),
        Node::text("\nYouTube: "),
        Node::link("YouTube Link", "https://www.youtube.com/@kprsnt"),
    ])
}

pub fn connect() -> Line {
    Line::response(vec![
        Node::text(
            "To connect with me for a 1:1 session:\n\
             Please use this link to schedule a meeting: ",
        ),
        Node::link("Meeting Link", "https://cal.com/kprsnt"),
    ])
}

pub fn resume() -> Line {
    Line::response(vec![
        Node::text("View my resume: "),
        Node::link(
            "Resume Link",
            "https://drive.google.com/file/d/1D6IJ6UMDkc715H_GLPbWLxemahpLh18G/view",
        ),
    ])
}

//! Posts shipped with the site, in display order.

use crate::models::Post;

/// The built-in posts, newest first.
pub fn bundled_posts() -> Vec<Post> {
    vec![cdm_intro(), linux_server()]
}

fn cdm_intro() -> Post {
    Post::new(
        "b2",
        "Introduction to Cognitive Diagnosis Models (CDM)",
        "February 14, 2025",
        "Exploring the fundamentals of CDMs and how to implement a basic DINA model using R.",
        vec!["Psychometrics".into(), "R".into(), "Statistics".into()],
        CDM_INTRO,
    )
}

fn linux_server() -> Post {
    Post::new(
        "b1",
        "Linux Server Configuration Guide",
        "January 23, 2025",
        "A quick reference guide for setting up a fresh Linux server, managing users, and securing SSH access.",
        vec!["Linux".into(), "DevOps".into(), "Tutorial".into()],
        LINUX_SERVER,
    )
}

const CDM_INTRO: &str = r#"
Cognitive Diagnosis Models (CDMs) are a class of latent variable models used to diagnose the presence or absence of specific fine-grained attributes (skills) required to solve test items.

## Why CDMs?
Unlike traditional IRT models that place students on a continuous scale of ability ($\theta$), CDMs classify students into latent classes based on mastery profiles.

- **Diagnostic Feedback**: Provides detailed strengths and weaknesses.
- **Remediation**: Helps teachers target specific skills for improvement.

## The DINA Model
The *Deterministic Input, Noisy "And" gate* (DINA) model is one of the most popular CDMs. It assumes that a student must master **all** required attributes to answer an item correctly.

### Key Parameters
1. **Guessing (g)**: Probability of answering correctly despite lacking skills.
2. **Slipping (s)**: Probability of answering incorrectly despite having skills.

## Implementation in R
We can use the `GDINA` package in R to estimate these models.

### 1. Load Data & Package
```r
library(GDINA)
dat <- sim10gdina$simdat
Q   <- sim10gdina$simQ
```

### 2. Fit the Model
```r
est <- GDINA(dat = dat, Q = Q, model = "DINA")
summary(est)
```

### 3. Visualize Results
We can plot the item parameters to see which items are the most difficult or prone to slipping.

```r
plot(est, item.par = TRUE)
```

> **Note**: This is a simplified example. Real-world applications often require Q-matrix validation and model fit analysis.

In future posts, I will discuss how to handle longitudinal data in CDMs using the methods described in my recent *Language Assessment Quarterly* paper.
  "#;

const LINUX_SERVER: &str = r#"
This guide covers the essential first steps when configuring a Linux server for research or web hosting purposes.

## 1. Initial System Update
Before installing any dependencies, always ensure your package lists and current software are up to date.

```bash
sudo apt update && sudo apt upgrade -y
```

## 2. User Management
It is best practice **not** to use the root account for daily operations. Create a new user with sudo privileges.

### Create a new user
Replace `qipeng` with your desired username:

```bash
sudo adduser qipeng
```

### Grant sudo privileges
Add the new user to the sudo group:

```bash
sudo usermod -aG sudo qipeng
```

## 3. SSH Security Configuration
Securing SSH is critical. We will disable root login and enforce key-based authentication (optional but recommended).

Edit the configuration file:
```bash
sudo nano /etc/ssh/sshd_config
```

Find and modify the following lines:

- **PermitRootLogin**: Set to `no`
- **PasswordAuthentication**: Set to `no` (only if you have set up SSH keys)

> **Tip**: Always test your new SSH configuration in a *new* terminal window before closing your current session to avoid locking yourself out!

Restart the SSH service to apply changes:

```bash
sudo systemctl restart ssh
```

## 4. Basic Firewall (UFW)
Ubuntu comes with UFW (Uncomplicated Firewall). Enable it to allow only necessary ports.

```bash
sudo ufw allow OpenSSH
sudo ufw enable
```

Now your server is secure and ready for development!
  "#;

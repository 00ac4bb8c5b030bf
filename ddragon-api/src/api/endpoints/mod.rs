mod champion;
mod profile_icon;
mod versions;

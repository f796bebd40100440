mod walkthrough;

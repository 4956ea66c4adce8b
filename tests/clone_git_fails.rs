use test_harness::GitGet;

#[test]
fn clone_git_fails() {
    let get = GitGet::new().unwrap();

    // Nothing at `remote/puppy/doggy.git`.
    let output = get.cmd().arg("puppy/doggy").output().unwrap();

    // `git clone` exits with 128 for a missing repository; the code is passed through as-is.
    assert_eq!(output.status.code(), Some(128));
    assert!(!get.destination("src", "remote/puppy/doggy").exists());
}

#[test]
fn clone_destination_exists() {
    let get = GitGet::new().unwrap();
    get.setup_repo("remote/puppy/doggy.git").unwrap();
    let destination = get.destination("src", "remote/puppy/doggy");
    std::fs::create_dir_all(&destination).unwrap();
    std::fs::write(destination.join("silly.txt"), "goose").unwrap();

    let output = get.cmd().arg("puppy/doggy").output().unwrap();

    assert_eq!(output.status.code(), Some(128));
}
